//! Code generation for the scan! macro.

use crate::parsing::ScanArgs;
use crate::tokenization::tokenize_format_string;
use crate::types::{FormatToken, Placeholder};
use proc_macro2::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::{LitStr, Type, spanned::Spanned};

/// Collect placeholders in order, rejecting ones with no separator between
/// them: they can never receive separate fields.
pub fn collect_placeholders(
    tokens: &[FormatToken],
    format_lit: &LitStr,
) -> syn::Result<Vec<Placeholder>> {
    let mut placeholders = Vec::with_capacity(tokens.len());
    let mut previous_was_placeholder = false;

    for token in tokens {
        match token {
            FormatToken::Placeholder(ph) => {
                if previous_was_placeholder {
                    return Err(syn::Error::new(
                        format_lit.span(),
                        "Consecutive placeholders without separator are ambiguous and not supported. \
                         Add text between placeholders to separate them. Example: '{}:{}' instead of '{}{}'",
                    ));
                }
                placeholders.push(*ph);
                previous_was_placeholder = true;
            }
            FormatToken::Text(_) => previous_was_placeholder = false,
        }
    }

    Ok(placeholders)
}

/// Generates a no-op call that only compiles if `ty` implements the marker
/// trait required by the placeholder's specifier.
fn generate_category_assertion(placeholder: Placeholder, ty: &Type) -> Option<TokenStream> {
    let Placeholder::Specified(specifier) = placeholder else {
        return None;
    };
    let marker = format_ident!("{}", specifier.marker_trait());
    let check = format_ident!("assert_{}", specifier.marker_trait().to_lowercase());

    Some(quote_spanned! {ty.span()=>
        {
            fn #check<T: ?Sized + ::typescan::#marker>() {}
            #check::<#ty>();
        }
    })
}

/// Create error for a placeholder/type count mismatch.
fn make_count_mismatch_error(placeholders: usize, types: &[&Type], format_lit: &LitStr) -> syn::Error {
    let span = types
        .get(placeholders)
        .map_or_else(|| format_lit.span(), |extra| extra.span());
    syn::Error::new(
        span,
        format!(
            "Format string has {} placeholder(s) but {} type(s) were given. \
             Provide exactly one type per placeholder.",
            placeholders,
            types.len()
        ),
    )
}

/// Generate complete scan implementation: tokenize, validate, codegen.
pub fn generate_scan_implementation(args: &ScanArgs) -> syn::Result<TokenStream> {
    let format_lit = &args.format;
    let input_expr = &args.input;
    let types: Vec<&Type> = args.types.iter().collect();

    let tokens = tokenize_format_string(&format_lit.value(), format_lit)?;
    let placeholders = collect_placeholders(&tokens, format_lit)?;

    if placeholders.is_empty() {
        return Err(syn::Error::new(
            format_lit.span(),
            "Format string has no placeholders. A scan without placeholders always fails \
             with a count mismatch; add at least one '{}'.",
        ));
    }

    if placeholders.len() != types.len() {
        return Err(make_count_mismatch_error(
            placeholders.len(),
            &types,
            format_lit,
        ));
    }

    let assertions = placeholders
        .iter()
        .zip(&types)
        .filter_map(|(&placeholder, ty)| generate_category_assertion(placeholder, ty))
        .collect::<Vec<_>>();

    // Hygiene: the block scopes the assertion helpers away from user code.
    Ok(quote! {
        {
            #(#assertions)*
            ::typescan::scan::<(#(#types,)*)>(#input_expr, #format_lit)
        }
    })
}
