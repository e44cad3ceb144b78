use log::debug;

use super::{require_optional, require_text, required, scoped, DiagramBuilder};
use crate::error::{Error, Result};
use crate::primitives::network::{Network, NetworkDiagram, NetworkElement, NetworkNode, NodeGroup};

pub type NetworkDiagramBuilder = DiagramBuilder<NetworkScope>;

impl NetworkDiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> NetworkDiagram {
        let (meta, (), scope) = self.into_parts();
        debug!(kind = "network", elements = scope.elements.len(); "Built diagram");
        NetworkDiagram {
            meta,
            elements: scope.elements,
        }
    }
}

fn check_node(node: &NetworkNode) -> Result<()> {
    require_text("node name", &node.name)?;
    require_optional("node address", node.address.as_deref())?;
    require_optional("node description", node.description.as_deref())
}

#[derive(Debug, Clone, Default)]
pub struct NetworkScope {
    elements: Vec<NetworkElement>,
}

impl NetworkScope {
    pub fn elements(&self) -> &[NetworkElement] {
        &self.elements
    }

    pub fn network<F>(&mut self, header: impl Into<Network>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut NetworkMembers) -> Result<()>,
    {
        let mut network = header.into();
        require_text("network name", &network.name)?;
        require_optional("network address", network.address.as_deref())?;
        require_optional("network description", network.description.as_deref())?;
        network.members = scoped::<NetworkMembers, _>(build)?.members;
        self.elements.push(NetworkElement::Network(network));
        Ok(self)
    }

    pub fn group<F>(&mut self, header: impl Into<NodeGroup>, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut GroupMembers) -> Result<()>,
    {
        let mut group = header.into();
        require_optional("group name", group.name.as_deref())?;
        require_optional("group description", group.description.as_deref())?;
        group.members = scoped::<GroupMembers, _>(build)?.members;
        if group.members.is_empty() {
            return Err(Error::Validation {
                field: "group",
                reason: "needs at least one member",
            });
        }
        self.elements.push(NetworkElement::Group(group));
        Ok(self)
    }

    pub fn node(&mut self, node: impl Into<NetworkNode>) -> Result<&mut Self> {
        let node = node.into();
        check_node(&node)?;
        self.elements.push(NetworkElement::Node(node));
        Ok(self)
    }

    /// Direct link between two nodes outside any network.
    pub fn peer(&mut self, from: impl Into<String>, to: impl Into<String>) -> Result<&mut Self> {
        let from = required("peer source", from)?;
        let to = required("peer target", to)?;
        self.elements.push(NetworkElement::Peer { from, to });
        Ok(self)
    }
}

/// Members attached to one network.
#[derive(Debug, Clone, Default)]
pub struct NetworkMembers {
    members: Vec<NetworkNode>,
}

impl NetworkMembers {
    pub fn member(&mut self, node: impl Into<NetworkNode>) -> Result<&mut Self> {
        let node = node.into();
        check_node(&node)?;
        self.members.push(node);
        Ok(self)
    }
}

/// Node names collected into a group.
#[derive(Debug, Clone, Default)]
pub struct GroupMembers {
    members: Vec<String>,
}

impl GroupMembers {
    pub fn member(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = required("group member", name)?;
        self.members.push(name);
        Ok(self)
    }
}
