//! A generic structural pretty-printer.
//!
//! Any value that can describe itself as a [`Node`] tree (records, enumeration cases,
//! sequences and scalars) is rendered as a Swift-like literal, for example
//! `Target(name: "X", dependencies: [...])`. The generic result can be overridden at
//! four points through a [`RenderHooks`] implementation, which receives the typed
//! subject that produced each node:
//!
//! 1. [`RenderHooks::enum_case`] - the text of an enumeration case
//! 2. [`RenderHooks::reorder_fields`] - the ordered field list of a record, before the
//!    record text is assembled
//! 3. [`RenderHooks::object`] - the whole text of an assembled record
//! 4. [`RenderHooks::scalar`] - the text of a leaf value
//!
//! The hooks are owned by the [`Renderer`], so every render has its own configuration.

/// Indentation used for every nesting level
pub const INDENT: &str = "    ";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unsupported dependency kind: {0}")]
    UnsupportedDependencyKind(String),
    #[error("unsupported resource rule: {0}")]
    UnsupportedResourceRule(String),
    #[error("field `{field}` not found while rendering {subject}")]
    MissingField {
        subject: &'static str,
        field: &'static str,
    },
}

/// A leaf value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Str(String),
    Bool(bool),
    Int(i64),
    /// The explicit absence of a value
    Nil,
}

/// The structural description of a value. `S` is the typed subject that the hooks
/// receive to take their decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Scalar {
        subject: S,
        value: Scalar,
    },
    Seq(Vec<Node<S>>),
    Case {
        subject: S,
        name: &'static str,
        fields: Vec<Field<S>>,
    },
    Record {
        subject: S,
        type_name: &'static str,
        fields: Vec<Field<S>>,
    },
}

/// A member of a record or an associated value of an enumeration case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<S> {
    pub label: Option<&'static str>,
    pub value: Node<S>,
    /// Whether the value is the one the manifest assumes when the field is omitted
    pub is_default: bool,
}

impl<S> Field<S> {
    pub fn new(label: &'static str, value: Node<S>) -> Self {
        Self {
            label: Some(label),
            value,
            is_default: false,
        }
    }

    pub fn unlabeled(value: Node<S>) -> Self {
        Self {
            label: None,
            value,
            is_default: false,
        }
    }

    pub fn default_when(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

/// A field whose value has already been rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub label: Option<String>,
    pub text: String,
    pub is_default: bool,
}

impl RenderedField {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
            is_default: false,
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }
}

/// The extension points of the [`Renderer`]. Every method defaults to the identity,
/// so implementors only override the points they care about
pub trait RenderHooks {
    type Subject: Copy;

    fn enum_case(&self, _subject: Self::Subject, generic: String) -> Result<String, RenderError> {
        Ok(generic)
    }

    fn reorder_fields(
        &self,
        _subject: Self::Subject,
        fields: Vec<RenderedField>,
    ) -> Result<Vec<RenderedField>, RenderError> {
        Ok(fields)
    }

    fn object(
        &self,
        _subject: Self::Subject,
        generic: String,
        _fields: &[RenderedField],
    ) -> Result<String, RenderError> {
        Ok(generic)
    }

    fn scalar(&self, _subject: Self::Subject, generic: String) -> Result<String, RenderError> {
        Ok(generic)
    }
}

/// Hooks that keep the generic rendering untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl RenderHooks for Identity {
    type Subject = ();
}

/// Renders [`Node`] trees, consulting its [`RenderHooks`] on every overridable point
///
/// ```rust
/// use spm_gen::printer::{Field, Identity, Node, Renderer, Scalar};
///
/// let node = Node::Record {
///     subject: (),
///     type_name: "Target",
///     fields: vec![
///         Field::new("name", Node::Scalar { subject: (), value: Scalar::Str("App".into()) }),
///         Field::new("dependencies", Node::Seq(vec![])),
///     ],
/// };
///
/// let text = Renderer::new(Identity).render(&node).unwrap();
/// assert_eq!(text, "Target(\n    name: \"App\",\n    dependencies: []\n)");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Renderer<H> {
    hooks: H,
}

impl<H: RenderHooks> Renderer<H> {
    pub fn new(hooks: H) -> Self {
        Self { hooks }
    }

    pub fn render(&self, node: &Node<H::Subject>) -> Result<String, RenderError> {
        match node {
            Node::Scalar { subject, value } => self.hooks.scalar(*subject, scalar_literal(value)),
            Node::Seq(items) => {
                let rendered = items
                    .iter()
                    .map(|item| self.render(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(sequence(&rendered))
            }
            Node::Case {
                subject,
                name,
                fields,
            } => {
                let fields = self.render_fields(fields)?;
                let head = format!(".{name}");
                let generic = if fields.is_empty() {
                    head
                } else if fields.iter().all(|field| !field.text.contains('\n')) {
                    inline_call(&head, &fields)
                } else {
                    call(&head, &fields)
                };
                self.hooks.enum_case(*subject, generic)
            }
            Node::Record {
                subject,
                type_name,
                fields,
            } => {
                let fields = self.render_fields(fields)?;
                let fields = self.hooks.reorder_fields(*subject, fields)?;
                let generic = call(type_name, &fields);
                self.hooks.object(*subject, generic, &fields)
            }
        }
    }

    fn render_fields(&self, fields: &[Field<H::Subject>]) -> Result<Vec<RenderedField>, RenderError> {
        fields
            .iter()
            .map(|field| {
                Ok(RenderedField {
                    label: field.label.map(str::to_string),
                    text: self.render(&field.value)?,
                    is_default: field.is_default,
                })
            })
            .collect()
    }
}

/// The literal text of a scalar
pub fn scalar_literal(value: &Scalar) -> String {
    match value {
        Scalar::Str(text) => quoted(text),
        Scalar::Bool(flag) => flag.to_string(),
        Scalar::Int(number) => number.to_string(),
        Scalar::Nil => "nil".to_string(),
    }
}

/// A double quoted string literal
pub fn quoted(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for ch in text.chars() {
        match ch {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}

/// Prefixes every line of `text` with one [`INDENT`]
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A multi-line sequence literal, one element per line
pub fn sequence(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    let mut text = String::from("[\n");
    for item in items {
        text.push_str(&indent(item));
        text.push_str(",\n");
    }
    text.push(']');
    text
}

/// A multi-line call expression, one argument per line
pub fn call(head: &str, fields: &[RenderedField]) -> String {
    if fields.is_empty() {
        return format!("{head}()");
    }

    let arguments = fields
        .iter()
        .map(|field| indent(&argument(field)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{head}(\n{arguments}\n)")
}

/// A call expression with every argument on the same line
pub fn inline_call(head: &str, fields: &[RenderedField]) -> String {
    let arguments = fields.iter().map(argument).collect::<Vec<_>>().join(", ");
    format!("{head}({arguments})")
}

fn argument(field: &RenderedField) -> String {
    match &field.label {
        Some(label) => format!("{label}: {}", field.text),
        None => field.text.clone(),
    }
}
