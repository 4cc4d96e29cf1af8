//! Intermediate representation of the generated fluent API.
//!
//! One [`CursorUnit`] per internal command node. Building the units resolves
//! every child reference and validates every generated name, so rendering
//! never sees a broken graph.

use std::collections::HashSet;

use proc_macro2::Ident;

use crate::error::{Error, Result};
use crate::normalize::{NodeMap, NormalizedNode};

/// Reference to a generated cursor type, living in its own module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRef {
    pub module: Ident,
    pub type_name: Ident,
}

impl CursorRef {
    fn for_node(node: &NormalizedNode) -> Result<Self> {
        Ok(CursorRef {
            module: ident(&format!("fluent_root{}", node.identifier), &node.cmd_path)?,
            type_name: ident(&format!("root{}", node.identifier), &node.cmd_path)?,
        })
    }
}

/// `cat_<child>`: moves the cursor to an internal child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub method: Ident,
    pub target: CursorRef,
    pub cmd_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: Ident,
    /// Key the value is sent under.
    pub wire: String,
}

/// `cmd_<child>`: sends a leaf command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    pub method: Ident,
    pub cmd_path: String,
    pub params: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorUnit {
    pub identifier: String,
    pub cmd_path: String,
    pub cursor: CursorRef,
    pub navigations: Vec<Navigation>,
    pub terminals: Vec<Terminal>,
}

fn ident(name: &str, cmd_path: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name).map_err(|_| Error::InvalidIdentifier {
        name: name.to_owned(),
        cmd_path: cmd_path.to_owned(),
    })
}

/// Records `name` in `seen`, failing if an earlier method or parameter of the
/// same scope already took it.
fn claim(seen: &mut HashSet<String>, name: &Ident, cmd_path: &str) -> Result<()> {
    if seen.insert(name.to_string()) {
        Ok(())
    } else {
        Err(Error::DuplicateName {
            name: name.to_string(),
            cmd_path: cmd_path.to_owned(),
        })
    }
}

fn parameters(child: &NormalizedNode) -> Result<Vec<Parameter>> {
    let mut seen = HashSet::new();
    child
        .args
        .iter()
        .map(|arg| -> Result<Parameter> {
            let name = ident(
                &format!("arg_{}", arg.sanitized.replace('-', "_")),
                &child.cmd_path,
            )?;
            claim(&mut seen, &name, &child.cmd_path)?;
            Ok(Parameter {
                name,
                wire: arg.wire.clone(),
            })
        })
        .collect()
}

impl CursorUnit {
    fn build(node: &NormalizedNode, nodes: &NodeMap) -> Result<Self> {
        let mut navigations = vec![];
        let mut terminals = vec![];
        let mut methods = HashSet::new();

        for subcmd in &node.subcmds {
            let key = node.child_key(subcmd);
            let child = nodes.get(&key).ok_or_else(|| Error::UnknownReference {
                parent: node.cmd_path.clone(),
                key: key.clone(),
            })?;

            if child.is_leaf {
                let method = ident(&format!("cmd_{subcmd}"), &child.cmd_path)?;
                claim(&mut methods, &method, &node.cmd_path)?;
                terminals.push(Terminal {
                    method,
                    cmd_path: child.cmd_path.clone(),
                    params: parameters(child)?,
                });
            } else {
                let method = ident(&format!("cat_{subcmd}"), &child.cmd_path)?;
                claim(&mut methods, &method, &node.cmd_path)?;
                navigations.push(Navigation {
                    method,
                    target: CursorRef::for_node(child)?,
                    cmd_path: child.cmd_path.clone(),
                });
            }
        }

        Ok(CursorUnit {
            identifier: node.identifier.clone(),
            cmd_path: node.cmd_path.clone(),
            cursor: CursorRef::for_node(node)?,
            navigations,
            terminals,
        })
    }
}

/// Builds a unit for every internal node, in mapping order. Fails on the
/// first unresolved reference, invalid name or repeated name.
pub fn build_units(nodes: &NodeMap) -> Result<Vec<CursorUnit>> {
    let units = nodes
        .values()
        .filter(|node| !node.is_leaf)
        .map(|node| CursorUnit::build(node, nodes))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(units = units.len(), "built cursor model");
    Ok(units)
}
