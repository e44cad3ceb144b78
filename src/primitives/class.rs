//! Class diagram IR. Relationships use [`RelationKind`], shared with object
//! diagrams.

use serde::{Deserialize, Serialize};

use crate::builder::ClassDiagramBuilder;
use crate::types::{DiagramMeta, Link, Note, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) options: ClassOptions,
    pub(crate) elements: Vec<ClassElement>,
}

impl ClassDiagram {
    pub fn builder() -> ClassDiagramBuilder {
        ClassDiagramBuilder::new()
    }

    pub fn options(&self) -> &ClassOptions {
        &self.options
    }

    pub fn elements(&self) -> &[ClassElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOptions {
    pub hide_empty_members: bool,
    pub left_to_right: bool,
    pub hide_circle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassElement {
    Class(Class),
    Package(ClassPackage),
    /// `together {` … `}` layout hint.
    Together(Vec<ClassElement>),
    Relation(Link<RelationKind>),
    Note(Note),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Abstract,
    Interface,
    Enum,
    Annotation,
    Entity,
    Exception,
    Struct,
    Protocol,
}

impl ClassKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Abstract => "abstract class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Annotation => "annotation",
            ClassKind::Entity => "entity",
            ClassKind::Exception => "exception",
            ClassKind::Struct => "struct",
            ClassKind::Protocol => "protocol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
    Package,
}

impl Visibility {
    pub fn to_char(&self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Package => '~',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberModifier {
    Static,
    Abstract,
}

impl MemberModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            MemberModifier::Static => "{static}",
            MemberModifier::Abstract => "{abstract}",
        }
    }
}

/// A field or method line. The text is emitted as given (`name : String`,
/// `start() : void`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub text: String,
    pub visibility: Option<Visibility>,
    pub modifier: Option<MemberModifier>,
}

impl Member {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: None,
            modifier: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    pub fn protected(self) -> Self {
        self.visibility(Visibility::Protected)
    }

    pub fn is_static(mut self) -> Self {
        self.modifier = Some(MemberModifier::Static);
        self
    }

    pub fn is_abstract(mut self) -> Self {
        self.modifier = Some(MemberModifier::Abstract);
        self
    }
}

impl From<&str> for Member {
    fn from(text: &str) -> Self {
        Member::new(text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    #[default]
    Solid,
    Dotted,
    Double,
    Underline,
}

impl SeparatorStyle {
    pub fn token(&self) -> &'static str {
        match self {
            SeparatorStyle::Solid => "--",
            SeparatorStyle::Dotted => "..",
            SeparatorStyle::Double => "==",
            SeparatorStyle::Underline => "__",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassBodyItem {
    Member(Member),
    /// `--`, or `-- title --` when titled.
    Separator {
        style: SeparatorStyle,
        title: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub kind: ClassKind,
    pub alias: Option<String>,
    /// Generic parameters without the angle brackets: `K, V`.
    pub generics: Option<String>,
    pub body: Vec<ClassBodyItem>,
    pub style: Style,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::default(),
            alias: None,
            generics: None,
            body: Vec::new(),
            style: Style::default(),
        }
    }

    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name).kind(ClassKind::Interface)
    }

    pub fn abstract_class(name: impl Into<String>) -> Self {
        Self::new(name).kind(ClassKind::Abstract)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name).kind(ClassKind::Enum)
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.body.push(ClassBodyItem::Member(member.into()));
        self
    }

    pub fn separator(mut self, style: SeparatorStyle) -> Self {
        self.body.push(ClassBodyItem::Separator { style, title: None });
        self
    }

    pub fn titled_separator(mut self, style: SeparatorStyle, title: impl Into<String>) -> Self {
        self.body.push(ClassBodyItem::Separator {
            style,
            title: Some(title.into()),
        });
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for Class {
    fn from(name: &str) -> Self {
        Class::new(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    #[default]
    Package,
    Namespace,
}

impl PackageKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            PackageKind::Package => "package",
            PackageKind::Namespace => "namespace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPackage {
    pub name: String,
    pub kind: PackageKind,
    pub style: Style,
    pub elements: Vec<ClassElement>,
}

impl ClassPackage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PackageKind::default(),
            style: Style::default(),
            elements: Vec::new(),
        }
    }

    pub fn namespace(name: impl Into<String>) -> Self {
        Self {
            kind: PackageKind::Namespace,
            ..Self::new(name)
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl From<&str> for ClassPackage {
    fn from(name: &str) -> Self {
        ClassPackage::new(name)
    }
}

/// Relationship vocabulary of class and object diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Extension,
    Implementation,
    Composition,
    Aggregation,
    Association,
    DirectedAssociation,
    Dependency,
    Dotted,
    Nested,
}
