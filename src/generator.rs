use indexmap::IndexMap;
use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::quote;

use crate::error::{Error, Result};
use crate::model::{CursorRef, CursorUnit, Navigation, Terminal};

/// Renders every unit into Rust source, keyed by module name.
pub fn generate(units: &[CursorUnit]) -> Result<IndexMap<String, String>> {
    let mut files: IndexMap<String, String> = IndexMap::default();
    for unit in units {
        let module = unit.cursor.module.to_string();
        let content = render_unit(unit)?;
        tracing::debug!(
            %module,
            navigations = unit.navigations.len(),
            terminals = unit.terminals.len(),
            "rendered cursor"
        );
        files.insert(module, content);
    }
    Ok(files)
}

fn describe_path(cmd_path: &str) -> String {
    if cmd_path.is_empty() {
        "the command root".to_owned()
    } else {
        format!("`{cmd_path}`")
    }
}

pub fn render_unit(unit: &CursorUnit) -> Result<String> {
    let CursorRef { module, type_name } = &unit.cursor;
    let cursor_doc = format!(" Fluent cursor positioned at {}.", describe_path(&unit.cmd_path));
    let navigations = unit.navigations.iter().map(generate_navigation);
    let terminals = unit.terminals.iter().map(generate_terminal);

    let tokens = quote! {
        #![allow(non_camel_case_types, non_snake_case, unused_imports)]

        use std::collections::BTreeMap;

        use super::{Client, ClientError, Response};

        #[doc = #cursor_doc]
        #[derive(Clone, Copy)]
        pub struct #type_name<'a> {
            client: &'a Client,
        }

        impl<'a> #type_name<'a> {
            pub fn new(client: &'a Client) -> Self {
                Self { client }
            }

            #( #navigations )*

            #( #terminals )*
        }
    };

    let file = syn::parse2::<syn::File>(tokens).map_err(|source| Error::Render {
        module: module.to_string(),
        source,
    })?;
    Ok(prettyplease::unparse(&file))
}

fn generate_navigation(navigation: &Navigation) -> TokenStream {
    let Navigation {
        method,
        target: CursorRef { module, type_name },
        cmd_path,
    } = navigation;
    let doc = format!(" Enters {}.", describe_path(cmd_path));

    quote! {
        #[doc = #doc]
        pub fn #method(&self) -> super::#module::#type_name<'a> {
            super::#module::#type_name::new(self.client)
        }
    }
}

fn generate_terminal_docs(terminal: &Terminal) -> Vec<String> {
    let mut docs = vec![format!(" Sends `{}`.", terminal.cmd_path)];
    if !terminal.params.is_empty() {
        let wires = terminal
            .params
            .iter()
            .map(|param| format!("`{}`", param.wire))
            .join(", ");
        docs.push(String::new());
        docs.push(" Empty values are left out of the request.".to_owned());
        docs.extend(
            textwrap::wrap(&format!("Arguments: {wires}"), wrap_options())
                .iter()
                .map(|line| format!(" {line}")),
        );
    }
    docs
}

fn wrap_options() -> textwrap::Options<'static> {
    textwrap::Options::new(80).word_splitter(textwrap::WordSplitter::NoHyphenation)
}

fn generate_terminal(terminal: &Terminal) -> TokenStream {
    let docs = generate_terminal_docs(terminal);
    let method = &terminal.method;
    let cmd_path = &terminal.cmd_path;
    let names: Vec<_> = terminal.params.iter().map(|param| &param.name).collect();
    let wires: Vec<_> = terminal.params.iter().map(|param| &param.wire).collect();
    let binding = if names.is_empty() {
        quote!(let args = BTreeMap::new();)
    } else {
        quote!(let mut args = BTreeMap::new();)
    };

    quote! {
        #( #[doc = #docs] )*
        pub fn #method(&self, #( #names: &str ),* ) -> Result<Response, ClientError> {
            #binding
            #(
                if !#names.is_empty() {
                    args.insert(#wires.to_owned(), #names.to_owned());
                }
            )*
            self.client.send_command(#cmd_path, args)
        }
    }
}
