use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitFloat, parse_macro_input, spanned::Spanned,
};

/// Variant attribute: #[weight(<expr>)]
#[proc_macro_derive(WeightedEnum, attributes(weight))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedEnum can only be derived for enums",
        ));
    };

    let mut entries = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "WeightedEnum only supports fieldless variants",
            ));
        }

        let Some(mut expr) = weight_of(&variant.attrs)? else {
            return Err(syn::Error::new(
                variant.span(),
                "missing #[weight(...)] on variant",
            ));
        };

        let ident = &variant.ident;
        promote_int_literals(&mut expr);
        entries.push(quote! { (Self::#ident, (#expr) as f64) });
    }

    Ok(quote! {
        impl ::weighted_pool::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, f64)] = &[
                #(#entries),*
            ];
        }
    })
}

/// The last `#[weight(...)]` on a variant, parsed as an expression.
fn weight_of(attrs: &[Attribute]) -> syn::Result<Option<Expr>> {
    let mut weight = None;
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("weight") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[weight(<expr>)]"));
        };
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid weight expr: {e}")))?;
        weight = Some(expr);
    }
    Ok(weight)
}

/// Turn integer literals into float literals (`1/100` becomes `1.0/100.0`) so
/// arithmetic in `#[weight(...)]` is done in floating point.
///
/// Only walks operands whose type follows the weight: operators, parentheses,
/// casts and method receivers. Method arguments and anything else keep their
/// literals, so `2.powi(3)` still passes an integer exponent.
fn promote_int_literals(expr: &mut Expr) {
    match expr {
        Expr::Lit(lit) => {
            if let Lit::Int(int) = &lit.lit {
                let float = format!("{}.0", int.base10_digits());
                lit.lit = Lit::Float(LitFloat::new(&float, int.span()));
            }
        }
        Expr::Binary(b) => {
            promote_int_literals(&mut b.left);
            promote_int_literals(&mut b.right);
        }
        Expr::Unary(u) => promote_int_literals(&mut u.expr),
        Expr::Paren(p) => promote_int_literals(&mut p.expr),
        Expr::Group(g) => promote_int_literals(&mut g.expr),
        Expr::Cast(c) => promote_int_literals(&mut c.expr),
        Expr::MethodCall(m) => promote_int_literals(&mut m.receiver),
        _ => {}
    }
}
