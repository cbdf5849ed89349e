use case::CaseExt;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed};

#[proc_macro_derive(Model, attributes(model))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let env = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("model"))
        .map(|attr| {
            attr.parse_args::<syn::Path>()
                .expect("#[model(...)] expects an environment type")
        })
        .expect("#[derive(Model)] requires a #[model(Env)] attribute");
    let named = match input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => panic!("#[derive(Model)] is only defined for structs with named fields"),
    };
    let fields = named.iter().collect::<Vec<_>>();
    match fields.first().and_then(|field| field.ident.as_ref()) {
        Some(ident) if ident == "ctx" => {}
        _ => panic!("#[derive(Model)] requires the first field to be named 'ctx'"),
    };
    let vis = &input.vis;
    let name = &input.ident;
    let field_enum = format_ident!("{}Field", name);
    let variants = fields
        .iter()
        .map(|field| {
            let ident = field.ident.as_ref().expect("named field");
            format_ident!("{}", ident.to_string().to_camel())
        })
        .collect::<Vec<_>>();
    let ctx_variant = &variants[0];
    let container_updates = fields
        .iter()
        .zip(variants.iter())
        .skip(1)
        .map(|(field, variant)| {
            let ident = field.ident.as_ref().expect("named field");
            quote! {
                let effects = crate::runtime::UpdateWithCtx::<#env>::update(
                    &mut self.#ident,
                    msg,
                    &self.ctx,
                );
                if effects.has_changed {
                    changed_fields.push(#field_enum::#variant);
                };
                all_effects.extend(effects);
            }
        })
        .collect::<Vec<_>>();
    let field_updates = fields
        .iter()
        .zip(variants.iter())
        .skip(1)
        .map(|(field, variant)| {
            let ident = field.ident.as_ref().expect("named field");
            quote! {
                #field_enum::#variant => {
                    let effects = crate::runtime::UpdateWithCtx::<#env>::update(
                        &mut self.#ident,
                        msg,
                        &self.ctx,
                    );
                    if effects.has_changed {
                        changed_fields.push(#field_enum::#variant);
                    };
                    all_effects.extend(effects);
                }
            }
        })
        .collect::<Vec<_>>();
    let expanded = quote! {
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #vis enum #field_enum {
            #(#variants,)*
        }
        impl crate::runtime::Model<#env> for #name {
            type Field = #field_enum;
            fn update(
                &mut self,
                msg: &crate::runtime::msg::Msg,
            ) -> (Vec<crate::runtime::Effect>, Vec<Self::Field>) {
                let mut all_effects = vec![];
                let mut changed_fields = vec![];
                let effects = crate::runtime::Update::<#env>::update(&mut self.ctx, msg);
                if effects.has_changed {
                    changed_fields.push(#field_enum::#ctx_variant);
                };
                all_effects.extend(effects);
                #(#container_updates)*
                (all_effects, changed_fields)
            }
            fn update_field(
                &mut self,
                msg: &crate::runtime::msg::Msg,
                field: &Self::Field,
            ) -> (Vec<crate::runtime::Effect>, Vec<Self::Field>) {
                let mut all_effects = vec![];
                let mut changed_fields = vec![];
                match field {
                    #field_enum::#ctx_variant => {
                        let effects = crate::runtime::Update::<#env>::update(&mut self.ctx, msg);
                        if effects.has_changed {
                            changed_fields.push(#field_enum::#ctx_variant);
                        };
                        all_effects.extend(effects);
                    }
                    #(#field_updates)*
                }
                (all_effects, changed_fields)
            }
        }
    };
    TokenStream::from(expanded)
}
