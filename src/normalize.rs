//! Reshapes raw command records into nodes keyed by sanitized identifier.

use indexmap::IndexMap;

use crate::schema::CommandRecord;

/// Names that collide with reserved words of generated code. Dropped from
/// both sub-command and argument lists.
pub const FORBIDDEN_NAMES: [&str; 6] = [
    "type",
    "interface",
    "import",
    "default",
    "select",
    "package",
];

pub fn is_forbidden(name: &str) -> bool {
    FORBIDDEN_NAMES.contains(&name)
}

/// `/ip/dhcp-server` -> `_ip_dhcp__server`
pub fn sanitize_path(cmd_path: &str) -> String {
    cmd_path.replace('-', "__").replace('/', "_")
}

pub fn sanitize_subcmd(name: &str) -> String {
    name.replace('-', "__")
}

/// `a.b` -> `adot_b`
pub fn sanitize_arg(name: &str) -> String {
    name.replace('.', "dot_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Name as the router expects it.
    pub wire: String,
    /// Name used to build the generated parameter.
    pub sanitized: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNode {
    pub identifier: String,
    /// Raw `subcmds` was empty, decided before filtering.
    pub is_leaf: bool,
    pub subcmds: Vec<String>,
    pub args: Vec<Argument>,
    pub cmd_path: String,
}

impl NormalizedNode {
    pub fn from_record(record: &CommandRecord) -> Self {
        let is_leaf = record.result.subcmds.is_empty();
        let subcmds = record
            .result
            .subcmds
            .iter()
            .filter(|name| !is_forbidden(name))
            .map(|name| sanitize_subcmd(name))
            .collect();
        let args = record
            .result
            .args
            .iter()
            .filter(|name| !is_forbidden(name))
            .map(|name| Argument {
                wire: name.clone(),
                sanitized: sanitize_arg(name),
            })
            .collect();

        NormalizedNode {
            identifier: sanitize_path(&record.cmd_path),
            is_leaf,
            subcmds,
            args,
            cmd_path: record.cmd_path.clone(),
        }
    }

    /// Lookup key of the sub-command `subcmd` (already sanitized).
    pub fn child_key(&self, subcmd: &str) -> String {
        format!("{}_{}", self.identifier, subcmd)
    }
}

pub type NodeMap = IndexMap<String, NormalizedNode>;

/// Builds the identifier -> node mapping. A later record whose identifier
/// collides with an earlier one replaces it in place.
pub fn normalize(records: &[CommandRecord]) -> NodeMap {
    let mut nodes = NodeMap::with_capacity(records.len());
    for record in records {
        let node = NormalizedNode::from_record(record);
        if let Some(previous) = nodes.insert(node.identifier.clone(), node) {
            tracing::warn!(
                identifier = %previous.identifier,
                replaced = %previous.cmd_path,
                by = %record.cmd_path,
                "identifier collision, keeping the later record"
            );
        }
    }
    tracing::info!(
        nodes = nodes.len(),
        internal = nodes.values().filter(|node| !node.is_leaf).count(),
        "normalized schema"
    );
    nodes
}
