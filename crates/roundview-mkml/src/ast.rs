// ── Unit ──────────────────────────────────────────────────────────────────

/// Length unit attached to a number literal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Unit {
    /// Device pixels: `12px`.
    Px,
    /// Density-independent pixels: `12dp` or `12dip`.
    Dp,
    /// Scale-independent pixels: `12sp`. Treated like `dp` (no font scale).
    Sp,
}

// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"avatar.png"`
    Str(String),
    /// Unitless number: `1.5` or `12`
    Number(f32),
    /// Number with a length unit: `12dp`
    Dimension(f32, Unit),
    /// `true` / `false`
    Bool(bool),
    /// Unquoted identifier: enum variants such as `circle` or `center_crop`
    Ident(String),
}

impl Value {
    /// Human-readable kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Dimension(..) => "dimension",
            Value::Bool(_) => "bool",
            Value::Ident(_) => "identifier",
        }
    }
}

// ── Attr ──────────────────────────────────────────────────────────────────

/// A single `key: value` attribute inside a view block.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
    /// 1-based line of the key, for diagnostics.
    pub line: usize,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A view declaration.
///
/// ```mkml
/// RoundImageView "avatar.png" {
///     shape: round
///     radius: 12dp
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// View type name: `"RoundImageView"`.
    pub view: String,
    /// Optional inline string content (the image source for image views).
    pub content: Option<String>,
    /// Attributes in source order. Later duplicates win on lookup.
    pub attrs: Vec<Attr>,
    /// Nested view declarations.
    pub children: Vec<Node>,
    /// 1-based line of the view name.
    pub line: usize,
}

impl Node {
    /// Look up an attribute value by key; the last occurrence wins.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.iter().rev().find(|a| a.key == key).map(|a| &a.value)
    }

    /// Attribute as `f32` if it is a unitless `Number`.
    pub fn attr_f32(&self, key: &str) -> Option<f32> {
        match self.attr(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Attribute as `&str` if it is a `Str` or `Ident`.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        match self.attr(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attribute as `bool` if it is a `Bool`.
    pub fn attr_bool(&self, key: &str) -> Option<bool> {
        match self.attr(key)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// ── DslDocument ───────────────────────────────────────────────────────────

/// The top-level parse result for a `.mkml` source: one or more views.
#[derive(Debug, Clone, PartialEq)]
pub struct DslDocument {
    pub nodes: Vec<Node>,
}
