use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta, Type};

/// Derive macro that generates field-level schema information for an
/// input struct.
///
/// For each named field it records:
/// - the wire name (respects `#[serde(rename = "...")]`)
/// - whether a value is required (`false` for `Option<T>` fields and for
///   fields carrying `#[serde(default)]` / `#[serde(default = "...")]`)
/// - a description taken from the field's doc comments
///
/// Generates an `input_schema() -> &'static [InputField]` method; the
/// `InputField` type is expected to be in scope at the derive site.
#[proc_macro_derive(InputSchema, attributes(serde))]
pub fn derive_input_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("InputSchema only supports structs with named fields"),
        },
        _ => panic!("InputSchema only supports structs"),
    };

    let entries = fields.iter().map(|field| {
        let ident = field.ident.as_ref().unwrap().to_string();
        let wire_name = serde_rename(&field.attrs).unwrap_or(ident);
        let required = !is_option(&field.ty) && !has_serde_default(&field.attrs);
        let description = doc_comment(&field.attrs);

        quote! {
            InputField {
                name: #wire_name,
                required: #required,
                description: #description,
            }
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn input_schema() -> &'static [InputField] {
                static SCHEMA: &[InputField] = &[
                    #(#entries),*
                ];
                SCHEMA
            }
        }
    };

    TokenStream::from(expanded)
}

/// Token-level scan of `#[serde(...)]` lists for `rename = "..."`.
fn serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    serde_tokens(attrs).iter().find_map(|tokens| {
        let start = tokens.find("rename")?;
        let rest = tokens[start..].split('=').nth(1)?.trim();
        let stripped = rest.strip_prefix('"')?;
        let end = stripped.find('"')?;
        Some(stripped[..end].to_string())
    })
}

fn has_serde_default(attrs: &[syn::Attribute]) -> bool {
    serde_tokens(attrs)
        .iter()
        .any(|tokens| tokens.split(',').any(|part| part.trim().starts_with("default")))
}

fn serde_tokens(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .filter_map(|attr| match &attr.meta {
            Meta::List(list) => Some(list.tokens.to_string()),
            _ => None,
        })
        .collect()
}

fn doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
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

fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
