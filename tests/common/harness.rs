use paredit::commands::{execute, Command};
use paredit::config::EngineConfig;
use paredit::model::document::StringDocument;
use paredit::model::region::SelRegion;

/// A scratch buffer with a selection, driven through the command table the
/// way a host editor would drive the engine.
pub struct Scratch {
    pub doc: StringDocument,
    pub selection: Vec<SelRegion>,
    pub config: EngineConfig,
}

impl Scratch {
    pub fn caret(text: &str, offset: usize) -> Self {
        Self {
            doc: StringDocument::new(text),
            selection: vec![SelRegion::caret(offset)],
            config: EngineConfig::default(),
        }
    }

    pub fn select(text: &str, anchor: usize, active: usize) -> Self {
        Self {
            doc: StringDocument::new(text),
            selection: vec![SelRegion::span(anchor, active)],
            config: EngineConfig::default(),
        }
    }

    pub fn carets(text: &str, offsets: &[usize]) -> Self {
        Self {
            doc: StringDocument::new(text),
            selection: offsets.iter().map(|&o| SelRegion::caret(o)).collect(),
            config: EngineConfig::default(),
        }
    }

    pub fn run(&mut self, command: Command) -> &mut Self {
        super::tracing::init_tracing_from_env();
        self.selection = execute(&mut self.doc, &self.selection, command, &self.config)
            .expect("command failed");
        self
    }

    pub fn contents(&self) -> String {
        self.doc.contents()
    }

    /// The single resulting caret; panics if the selection is not exactly
    /// one caret.
    pub fn caret_offset(&self) -> usize {
        assert_eq!(self.selection.len(), 1, "expected a single region");
        let region = self.selection[0];
        assert!(region.is_caret(), "expected a caret, got {region:?}");
        region.active
    }
}
