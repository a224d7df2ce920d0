use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Derive macro turning a struct into an element of an intrusive `SList`.
///
/// The struct must have a `link: SingleLink` field and may have a `data`
/// field. The generated `Link` impl reads and writes the embedded link;
/// `NodeWithData` is generated only when `data` is present.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn crate_path(input: &DeriveInput) -> syn::Result<TokenStream2> {
    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            let path = attr.parse_args::<NodeAttribute>()?.crate_path;
            return Ok(quote! { #path });
        }
    }
    Ok(quote! { ::slist_collections })
}

fn split_fields(input: &DeriveInput) -> syn::Result<(Field, Option<Field>)> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    else {
        return Err(syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        ));
    };

    let mut link_field = None;
    let mut data_field = None;
    for field in fields.named.iter() {
        if let Some(ident) = &field.ident {
            match ident.to_string().as_str() {
                "link" => link_field = Some(field.clone()),
                "data" => data_field = Some(field.clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "Unexpected field name: expected 'link' or 'data'",
                    ));
                }
            }
        }
    }

    let link_field = link_field.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "Struct must have a field named 'link'")
    })?;
    Ok((link_field, data_field))
}

fn check_link_type(link_type: &Type) -> syn::Result<()> {
    let Type::Path(TypePath { path, .. }) = link_type else {
        return Err(syn::Error::new_spanned(link_type, "Field 'link' must be a SingleLink"));
    };
    match path.segments.last() {
        Some(segment) if segment.ident == "SingleLink" => Ok(()),
        Some(segment) => Err(syn::Error::new_spanned(
            &segment.ident,
            "Field 'link' must be a 'SingleLink'",
        )),
        None => Err(syn::Error::new_spanned(path, "Expected at least one segment in the type path")),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let crate_path = crate_path(&input)?;
    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let (link_field, data_field) = split_fields(&input)?;
    check_link_type(&link_field.ty)?;

    // The link stores a pointer to the whole element, so the casts below
    // round-trip regardless of where `link` sits in the struct.
    let link_impl = quote! {
        impl #impl_generics #intrusive_path::traits::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self::Target>> {
                self.link.get().map(|n| n.cast())
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self::Target>>) {
                self.link.set(next.map(|n| n.cast()));
            }
        }
    };

    let data_impl = if let Some(data_field) = data_field {
        let data_type = &data_field.ty;
        quote! {
            impl #impl_generics #intrusive_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
                type Data = #data_type;

                #[inline]
                fn data(&self) -> &Self::Data {
                    &self.data
                }

                #[inline]
                fn data_mut(&mut self) -> &mut Self::Data {
                    &mut self.data
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #link_impl
        #data_impl
    })
}
