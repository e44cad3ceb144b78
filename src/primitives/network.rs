//! Network (nwdiag) diagram IR.

use serde::{Deserialize, Serialize};

use super::deployment::DeploymentKind;
use crate::builder::NetworkDiagramBuilder;
use crate::types::{Color, DiagramMeta};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDiagram {
    pub(crate) meta: DiagramMeta,
    pub(crate) elements: Vec<NetworkElement>,
}

impl NetworkDiagram {
    pub fn builder() -> NetworkDiagramBuilder {
        NetworkDiagramBuilder::new()
    }

    pub fn elements(&self) -> &[NetworkElement] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkElement {
    Network(Network),
    Group(NodeGroup),
    /// A node outside any network, declared for its attributes.
    Node(NetworkNode),
    /// `a -- b;`
    Peer { from: String, to: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub address: Option<String>,
    pub color: Option<Color>,
    pub description: Option<String>,
    /// Stretch the network bar across the whole diagram.
    pub full_width: bool,
    pub members: Vec<NetworkNode>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            color: None,
            description: None,
            full_width: false,
            members: Vec::new(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
}

impl From<&str> for Network {
    fn from(name: &str) -> Self {
        Network::new(name)
    }
}

/// A host; inside a network `address` is its address on that network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub shape: Option<DeploymentKind>,
    pub color: Option<Color>,
}

impl NetworkNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            description: None,
            shape: None,
            color: None,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn shape(mut self, shape: DeploymentKind) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn has_attributes(&self) -> bool {
        self.address.is_some()
            || self.description.is_some()
            || self.shape.is_some()
            || self.color.is_some()
    }
}

impl From<&str> for NetworkNode {
    fn from(name: &str) -> Self {
        NetworkNode::new(name)
    }
}

/// Highlight box around nodes, referenced by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeGroup {
    pub name: Option<String>,
    pub color: Option<Color>,
    pub description: Option<String>,
    pub members: Vec<String>,
}

impl NodeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&str> for NodeGroup {
    fn from(name: &str) -> Self {
        NodeGroup::named(name)
    }
}
