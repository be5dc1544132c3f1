use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index, LitStr};

macro_rules! has_attr {
    ($F:expr, $Attr:expr) => {
        $F.attrs.iter().find(|a| a.path().is_ident($Attr)).is_some()
    };
}

/// Implements `actkern::tensor_ops::Attributes` for an activation functor.
///
/// Every field marked with `#[attr]` is a scalar slot that is filled from the
/// operation's attribute table before the functor runs. The table key is the
/// field name, or the string given with `#[attr(name = "...")]`. Fields without
/// the attribute are left untouched. Slots are bound in declaration order.
///
/// Unit structs get an implementation that declares no attributes.
///
/// ```ignore
/// #[derive(Debug, Default, Clone, Copy, actkern::Attributes)]
/// pub struct BReluKernelOp {
///     #[attr]
///     pub t_min: f32,
///     #[attr]
///     pub t_max: f32,
/// }
/// ```
///
/// Tuple structs must name every slot explicitly:
///
/// ```ignore
/// #[derive(Debug, Default, Clone, Copy, actkern::Attributes)]
/// pub struct Scaled(#[attr(name = "scale")] pub f32);
/// ```
#[proc_macro_derive(Attributes, attributes(attr))]
pub fn attributes(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;

    let slots: Vec<(String, proc_macro2::TokenStream)> = match &input.data {
        Data::Struct(ref obj) => match obj.fields {
            Fields::Named(ref fields) => fields
                .named
                .iter()
                .filter(|f| has_attr!(f, "attr"))
                .map(|f| {
                    let ident = f.ident.as_ref().unwrap();
                    let key = attr_key(f).unwrap_or_else(|| ident.to_string());
                    (key, quote_spanned!(f.span()=> self.#ident))
                })
                .collect(),
            Fields::Unnamed(ref fields) => fields
                .unnamed
                .iter()
                .enumerate()
                .filter(|(_, f)| has_attr!(f, "attr"))
                .map(|(i, f)| {
                    let index = Index::from(i);
                    let key = attr_key(f)
                        .expect("tuple struct attributes need #[attr(name = \"...\")]");
                    (key, quote_spanned!(f.span()=> self.#index))
                })
                .collect(),
            Fields::Unit => Vec::new(),
        },
        Data::Enum(_) => unimplemented!("Attributes not implemented for enums."),
        Data::Union(_) => unimplemented!("Attributes not implemented for unions."),
    };

    let keys = slots.iter().map(|(key, _)| key);
    let assigns = slots.iter().map(|(key, place)| {
        quote! { #place = attrs.try_get_f32(#key)?; }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    proc_macro::TokenStream::from(quote! {
        impl #impl_generics ::actkern::tensor_ops::Attributes
            for #name #ty_generics #where_clause
        {
            const ATTR_NAMES: &'static [&'static str] = &[#(#keys),*];

            #[allow(unused_variables)]
            fn try_set_attributes(
                &mut self,
                attrs: &::actkern::tensor_ops::AttrTable,
            ) -> Result<(), ::actkern::tensor_ops::AttrError> {
                #(#assigns)*
                Ok(())
            }
        }
    })
}

/// Reads `name = "..."` out of `#[attr(...)]`, if present.
fn attr_key(field: &syn::Field) -> Option<String> {
    let attr = field.attrs.iter().find(|a| a.path().is_ident("attr"))?;
    if matches!(attr.meta, syn::Meta::Path(_)) {
        return None;
    }
    let mut key = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            key = Some(lit.value());
            Ok(())
        } else {
            Err(meta.error("unsupported attr option, expected `name`"))
        }
    })
    .unwrap();
    key
}
