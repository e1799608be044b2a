//! Macro argument parsing structures.

use syn::{
    Expr, LitStr, Token, Type,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Comma,
};

/// scan! arguments: input, format, types
pub struct ScanArgs {
    pub input: Expr,
    pub format: LitStr,
    pub types: Punctuated<Type, Comma>,
}

impl Parse for ScanArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let input_expr = input.parse()?;
        input.parse::<Token![,]>()?;
        let format = input.parse()?;

        let types = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };

        Ok(Self {
            input: input_expr,
            format,
            types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let args: ScanArgs = syn::parse_quote!(line, "{} {}", i32, &str);
        assert_eq!(args.format.value(), "{} {}");
        assert_eq!(args.types.len(), 2);
    }

    #[test]
    fn test_trailing_comma_and_no_types() {
        let args: ScanArgs = syn::parse_quote!(line, "{}", u8,);
        assert_eq!(args.types.len(), 1);
        let args: ScanArgs = syn::parse_quote!(line, "literal");
        assert!(args.types.is_empty());
    }
}
