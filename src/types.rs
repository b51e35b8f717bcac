/// An inspection operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupAction {
    /// Every resolved key with its value.
    List,
    /// A single resolved key, with its doc comment.
    Get { key: String },
    /// A commented TOML template of the section.
    Template,
    /// The exported documentation tree, as JSON.
    Docs,
}
