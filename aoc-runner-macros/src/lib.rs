//! Procedural macros for the aoc-runner library

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parse;
use syn::{DeriveInput, Expr, LitInt, LitStr, Token, parse_macro_input};

/// Highest day number a plugin may name
const MAX_DAY: u8 = 25;

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts; `PartSolver<1>` through `PartSolver<max_parts>`
///   must be implemented.
/// - `examples`: Optional. A path or expression of type `&'static [Example]` used by the
///   self-test.
///
/// # Example
///
/// ```ignore
/// use aoc_runner::{AocSolver, Example};
///
/// const EXAMPLES: &[Example] = &[Example::new(1, "1\n2", 3)];
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2, examples = EXAMPLES)]
/// struct Day01;
///
/// impl AocParser for Day01 { /* ... */ }
/// impl PartSolver<1> for Day01 { /* ... */ }
/// impl PartSolver<2> for Day01 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AocSolver requires #[aoc_solver(max_parts = N)]")
        })?;

    let mut max_parts: Option<u8> = None;
    let mut examples: Option<Expr> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
            Ok(())
        } else if meta.path.is_ident("examples") {
            examples = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("expected `max_parts` or `examples`"))
        }
    })?;

    let max_parts = match max_parts {
        Some(n) if n > 0 => n,
        Some(_) => return Err(syn::Error::new_spanned(attr, "max_parts must be at least 1")),
        None => return Err(syn::Error::new_spanned(attr, "missing required `max_parts`")),
    };

    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_runner::PartSolver<#part>>::solve(shared),
        }
    });

    let examples_const = examples.map(|expr| {
        quote! {
            const EXAMPLES: &'static [::aoc_runner::Example] = #expr;
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::aoc_runner::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;
            #examples_const

            fn solve_part(
                shared: &mut <Self as ::aoc_runner::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::aoc_runner::Answer, ::aoc_runner::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::aoc_runner::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro submits a `SolverPlugin` to the inventory, so
/// `RegistryBuilder::register_all_plugins` picks the solver up.
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "parsing"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait and be a unit struct.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(day = 1, tags = ["parsing"])]
/// struct Day01;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires #[aoc(day = N)]")
        })?;

    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if value == 0 || value > MAX_DAY {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("day must be between 1 and {MAX_DAY}"),
                ));
            }
            day = Some(value);
            Ok(())
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let parsed = content.parse_terminated(<LitStr as Parse>::parse, Token![,])?;
            tags.extend(parsed);
            Ok(())
        } else {
            Err(meta.error("expected `day` or `tags`"))
        }
    })?;

    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_runner::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_runner::inventory::submit! {
            ::aoc_runner::SolverPlugin {
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
