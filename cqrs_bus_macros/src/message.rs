use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, LitStr, Type};

/// Which category trait the derive implements on top of `Message`.
#[derive(Clone, Copy)]
pub enum Kind {
    Command,
    Query,
    Event,
}

impl Kind {
    /// Name of the helper attribute, e.g. `#[command(...)]`.
    fn attribute(self) -> &'static str {
        match self {
            Kind::Command => "command",
            Kind::Query => "query",
            Kind::Event => "event",
        }
    }

    fn variant(self) -> syn::Ident {
        match self {
            Kind::Command => format_ident!("Command"),
            Kind::Query => format_ident!("Query"),
            Kind::Event => format_ident!("Event"),
        }
    }

    fn has_output(self) -> bool {
        !matches!(self, Kind::Event)
    }
}

struct MessageArgs {
    name: Option<LitStr>,
    output: Option<Type>,
}

pub fn derive_message(input: TokenStream, kind: Kind) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand(&input, kind) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput, kind: Kind) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let args = parse_args(input, kind)?;

    let name = args
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let variant = kind.variant();

    let message_impl = quote! {
        impl #impl_generics ::cqrs_bus::Message for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const KIND: ::cqrs_bus::MessageKind = ::cqrs_bus::MessageKind::#variant;
        }
    };

    let category_impl = if kind.has_output() {
        let output = args.output.unwrap_or_else(|| syn::parse_quote!(()));
        quote! {
            impl #impl_generics ::cqrs_bus::#variant for #ident #ty_generics #where_clause {
                type Output = #output;
            }
        }
    } else {
        quote! {
            impl #impl_generics ::cqrs_bus::#variant for #ident #ty_generics #where_clause {}
        }
    };

    Ok(quote! {
        #message_impl
        #category_impl
    })
}

fn parse_args(input: &DeriveInput, kind: Kind) -> syn::Result<MessageArgs> {
    let mut args = MessageArgs {
        name: None,
        output: None,
    };

    for attr in &input.attrs {
        if !attr.path().is_ident(kind.attribute()) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                args.name = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("output") && kind.has_output() {
                args.output = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error(format!(
                    "unsupported #[{}] argument",
                    kind.attribute()
                )))
            }
        })?;
    }

    Ok(args)
}
