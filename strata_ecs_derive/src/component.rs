use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let name_str = name.to_string();
    let kind_name = format_ident!("__COMPONENT_KIND_OF_{}", name_str.to_uppercase());

    // Leading `::` keeps the generated paths valid inside `strata_ecs` itself,
    // which declares `extern crate self as strata_ecs`.
    let gen = quote! {
        ::strata_ecs::lazy_static! {
            static ref #kind_name: ::strata_ecs::components::ComponentKind =
                ::strata_ecs::components::component_kind::register::<#name>(#name_str);
        }

        impl ::strata_ecs::components::Component for #name {
            #[inline(always)]
            fn kind(&self) -> ::strata_ecs::components::ComponentKind {
                *#kind_name
            }

            fn name(&self) -> &'static str {
                #name_str
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl ::strata_ecs::components::ComponentKindInfo for #name {
            #[inline(always)]
            fn component_kind() -> ::strata_ecs::components::ComponentKind {
                *#kind_name
            }
        }
    };
    gen.into()
}
