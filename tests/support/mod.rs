//! Shared test support: a scripted host recording everything the engine
//! does to it.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use url::Url;

use limelight::{
    CONTEXT_IS_ACTIVE, DecorationId, DimStyle, EditorHost, EditorView, LimelightError,
    LimelightResult, Location, Position, Range, SymbolKind, SymbolNode,
};

/// Scripted outcome for a provider query.
pub enum ProviderScript<T> {
    Respond(Option<T>),
    Reject(String),
}

impl<T> Default for ProviderScript<T> {
    fn default() -> Self {
        ProviderScript::Respond(None)
    }
}

/// An [`EditorHost`] whose collaborators are scripted by the test and whose
/// outbound calls are recorded for assertions.
#[derive(Default)]
pub struct MockHost {
    pub editor: Mutex<Option<EditorView>>,
    pub config: Mutex<Value>,
    pub symbols: Mutex<ProviderScript<Vec<SymbolNode>>>,
    pub references: Mutex<ProviderScript<Vec<Location>>>,
    next_decoration: AtomicU64,
    pub created: Mutex<Vec<(DecorationId, DimStyle)>>,
    pub disposed: Mutex<Vec<DecorationId>>,
    pub dim_calls: Mutex<Vec<(Url, DecorationId, Vec<Range>)>>,
    pub revealed: Mutex<Vec<(Url, Range)>>,
    pub context_flags: Mutex<Vec<(String, bool)>>,
    pub messages: Mutex<Vec<String>>,
    pub peeks: Mutex<Vec<(Url, Position, Vec<Location>)>>,
}

impl MockHost {
    pub fn new() -> Self {
        let host = Self::default();
        *host.config.lock().unwrap() = json!({});
        host
    }

    pub fn set_editor(&self, editor: Option<EditorView>) {
        *self.editor.lock().unwrap() = editor;
    }

    pub fn set_config(&self, value: Value) {
        *self.config.lock().unwrap() = value;
    }

    pub fn script_symbols(&self, script: ProviderScript<Vec<SymbolNode>>) {
        *self.symbols.lock().unwrap() = script;
    }

    pub fn script_references(&self, script: ProviderScript<Vec<Location>>) {
        *self.references.lock().unwrap() = script;
    }

    /// Last value the engine set for the `limelight.isActive` flag.
    pub fn last_context(&self) -> Option<bool> {
        self.context_flags
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(key, _)| key == CONTEXT_IS_ACTIVE)
            .map(|(_, value)| *value)
    }

    /// Ranges from the most recent decoration application to `uri`.
    pub fn last_dim_ranges(&self, uri: &Url) -> Option<Vec<Range>> {
        self.dim_calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(u, _, _)| u == uri)
            .map(|(_, _, ranges)| ranges.clone())
    }

    pub fn dim_call_count(&self) -> usize {
        self.dim_calls.lock().unwrap().len()
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl EditorHost for MockHost {
    fn active_editor(&self) -> Option<EditorView> {
        self.editor.lock().unwrap().clone()
    }

    fn configuration(&self) -> Value {
        self.config.lock().unwrap().clone()
    }

    async fn document_symbols(&self, _uri: &Url) -> LimelightResult<Option<Vec<SymbolNode>>> {
        match &*self.symbols.lock().unwrap() {
            ProviderScript::Respond(symbols) => Ok(symbols.clone()),
            ProviderScript::Reject(message) => Err(LimelightError::provider(message.clone())),
        }
    }

    async fn references(
        &self,
        _uri: &Url,
        _position: Position,
    ) -> LimelightResult<Option<Vec<Location>>> {
        match &*self.references.lock().unwrap() {
            ProviderScript::Respond(locations) => Ok(locations.clone()),
            ProviderScript::Reject(message) => Err(LimelightError::provider(message.clone())),
        }
    }

    fn create_dim_decoration(&self, style: &DimStyle) -> DecorationId {
        let id = DecorationId::new(self.next_decoration.fetch_add(1, Ordering::SeqCst));
        self.created.lock().unwrap().push((id, style.clone()));
        id
    }

    fn dispose_decoration(&self, id: DecorationId) {
        self.disposed.lock().unwrap().push(id);
    }

    fn set_dim_ranges(&self, uri: &Url, decoration: DecorationId, ranges: &[Range]) {
        self.dim_calls
            .lock()
            .unwrap()
            .push((uri.clone(), decoration, ranges.to_vec()));
    }

    fn reveal_range(&self, uri: &Url, range: Range) {
        self.revealed.lock().unwrap().push((uri.clone(), range));
    }

    fn set_context(&self, key: &str, value: bool) {
        self.context_flags
            .lock()
            .unwrap()
            .push((key.to_string(), value));
    }

    fn show_info_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn peek_locations(&self, uri: &Url, position: Position, locations: &[Location]) {
        self.peeks
            .lock()
            .unwrap()
            .push((uri.clone(), position, locations.to_vec()));
    }
}

pub fn file_uri(path: &str) -> Url {
    Url::parse(&format!("file://{}", path)).unwrap()
}

pub fn editor_at(uri: &Url, line_count: u32, cursor: Position) -> EditorView {
    EditorView {
        uri: uri.clone(),
        line_count,
        cursor,
        selection: None,
    }
}

pub fn editor_with_selection(uri: &Url, line_count: u32, selection: Range) -> EditorView {
    EditorView {
        uri: uri.clone(),
        line_count,
        cursor: selection.end,
        selection: Some(selection),
    }
}

/// A file with one class (`Widget`, lines 0..=20) holding a method
/// (`render`, lines 7..=15), and a free function (`helper`, lines 22..=30).
pub fn sample_symbols() -> Vec<SymbolNode> {
    vec![
        SymbolNode::new("Widget", SymbolKind::Class, Range::of(0, 0, 20, 1)).with_children(vec![
            SymbolNode::new("render", SymbolKind::Method, Range::of(7, 4, 15, 5)),
        ]),
        SymbolNode::new("helper", SymbolKind::Function, Range::of(22, 0, 30, 1)),
    ]
}

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
