use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that exposes the `String` fields of a form struct by name.
///
/// For each field, extracts:
/// - Field name (respects #[serde(rename = "...")])
/// - Description (from doc comments)
///
/// Generates an implementation of `crate::form::FormFields` with the static
/// field list plus a by-name getter and setter.
#[proc_macro_derive(FormFields, attributes(serde))]
pub fn derive_form_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("FormFields only supports structs with named fields"),
        },
        _ => panic!("FormFields only supports structs"),
    };

    let idents: Vec<_> = fields
        .iter()
        .map(|field| field.ident.clone().expect("named field"))
        .collect();

    let names: Vec<String> = fields
        .iter()
        .zip(&idents)
        .map(|(field, ident)| get_serde_rename(&field.attrs).unwrap_or_else(|| ident.to_string()))
        .collect();

    let docs: Vec<String> = fields.iter().map(|field| get_doc_comment(&field.attrs)).collect();

    let field_entries = names.iter().zip(&docs).map(|(name, desc)| {
        quote! {
            crate::form::FormField {
                name: #name,
                description: #desc,
            }
        }
    });

    let expanded = quote! {
        impl crate::form::FormFields for #name {
            fn fields() -> &'static [crate::form::FormField] {
                static FIELDS: &[crate::form::FormField] = &[
                    #(#field_entries),*
                ];
                FIELDS
            }

            fn field(&self, name: &str) -> Option<&str> {
                match name {
                    #(#names => Some(self.#idents.as_str()),)*
                    _ => None,
                }
            }

            fn set_field(&mut self, name: &str, value: &str) -> bool {
                match name {
                    #(#names => {
                        self.#idents = value.to_string();
                        true
                    })*
                    _ => false,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        if let Meta::List(meta_list) = &attr.meta {
            let tokens = meta_list.tokens.to_string();
            // Simple parsing: look for rename = "..."
            if let Some(start) = tokens.find("rename") {
                let rest = &tokens[start..];
                if let Some(eq_pos) = rest.find('=') {
                    let after_eq = rest[eq_pos + 1..].trim();
                    if let Some(stripped) = after_eq.strip_prefix('"') {
                        if let Some(end_quote) = stripped.find('"') {
                            return Some(stripped[..end_quote].to_string());
                        }
                    }
                }
            }
        }
    }
    None
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}
