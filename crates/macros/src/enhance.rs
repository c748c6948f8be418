//! `#[derive(EnhanceEnum)]` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{
	Attribute, Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, LitStr, UnOp,
	parse_macro_input,
};

pub fn derive_enhance_enum(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(&input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

/// Options from the type-level `#[enhance(...)]` attribute.
#[derive(Default)]
struct TypeOptions {
	value_field: Option<LitStr>,
	desc_field: Option<LitStr>,
	group_field: Option<LitStr>,
	name_as_value: Option<LitStr>,
	skip_registry: bool,
}

/// One parsed variant.
struct VariantDef {
	ident: Ident,
	name: String,
	entries: Vec<(String, TokenStream2)>,
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
	let enum_name = &input.ident;

	let Data::Enum(data) = &input.data else {
		return Err(syn::Error::new_spanned(
			enum_name,
			"EnhanceEnum can only be derived for enums",
		));
	};

	if !input.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&input.generics,
			"EnhanceEnum cannot be derived for generic enums",
		));
	}

	let options = parse_type_options(&input.attrs)?;

	let mut variants: Vec<VariantDef> = Vec::with_capacity(data.variants.len());
	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(
				&variant.fields,
				"EnhanceEnum requires unit variants",
			));
		}

		let def = parse_variant(&variant.ident, &variant.attrs)?;
		if variants.iter().any(|v| v.name == def.name) {
			return Err(syn::Error::new_spanned(
				&variant.ident,
				format!("duplicate variant name `{}`", def.name),
			));
		}
		variants.push(def);
	}

	let setters = field_setters(&options);

	let idents: Vec<&Ident> = variants.iter().map(|v| &v.ident).collect();
	let ordinals = 0..variants.len();
	let names = variants.iter().map(|v| v.name.as_str());

	let field_arms: Vec<TokenStream2> = variants
		.iter()
		.flat_map(|v| {
			let ident = &v.ident;
			v.entries.iter().map(move |(key, value)| {
				quote! { (Self::#ident, #key) => ::core::option::Option::Some(#value) }
			})
		})
		.collect();

	let field_fn = if field_arms.is_empty() {
		quote! {}
	} else {
		quote! {
			fn field(&self, field: &str) -> ::core::option::Option<::enhance_enum::FieldValue> {
				match (self, field) {
					#(#field_arms,)*
					_ => ::core::option::Option::None,
				}
			}
		}
	};

	let registration = if options.skip_registry {
		quote! {}
	} else {
		let name_str = enum_name.to_string();
		quote! {
			::enhance_enum::__private::inventory::submit! {
				::enhance_enum::TypeDef::enumeration::<#enum_name>(
					#name_str,
					::core::concat!(::core::module_path!(), "::", #name_str),
				)
			}
		}
	};

	Ok(quote! {
		impl ::enhance_enum::EnhanceEnum for #enum_name {
			const FIELDS: ::enhance_enum::FieldResolution =
				::enhance_enum::FieldResolution::DEFAULT #(#setters)*;

			const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

			fn ordinal(&self) -> usize {
				match *self {
					#(Self::#idents => #ordinals,)*
				}
			}

			fn name(&self) -> &'static str {
				match *self {
					#(Self::#idents => #names,)*
				}
			}

			#field_fn
		}

		const _: ::enhance_enum::FieldResolution =
			<#enum_name as ::enhance_enum::EnhanceEnum>::FIELDS;

		#registration
	})
}

fn parse_type_options(attrs: &[Attribute]) -> syn::Result<TypeOptions> {
	let mut options = TypeOptions::default();

	for attr in attrs.iter().filter(|a| a.path().is_ident("enhance")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("skip_registry") {
				options.skip_registry = true;
				return Ok(());
			}

			let slot = if meta.path.is_ident("value_field") {
				&mut options.value_field
			} else if meta.path.is_ident("desc_field") {
				&mut options.desc_field
			} else if meta.path.is_ident("group_field") {
				&mut options.group_field
			} else if meta.path.is_ident("name_as_value") {
				&mut options.name_as_value
			} else {
				return Err(meta.error("unknown enhance attribute"));
			};

			let lit: LitStr = meta.value()?.parse()?;
			if lit.value().is_empty() {
				return Err(syn::Error::new_spanned(&lit, "attribute value must not be empty"));
			}
			if slot.is_some() {
				return Err(meta.error("attribute given more than once"));
			}
			*slot = Some(lit);
			Ok(())
		})?;
	}

	Ok(options)
}

fn field_setters(options: &TypeOptions) -> Vec<TokenStream2> {
	let mut setters = Vec::new();
	if let Some(field) = &options.value_field {
		setters.push(quote! { .value_field(#field) });
	}
	if let Some(mode) = &options.name_as_value {
		// Unknown keywords fail constant evaluation at the literal.
		setters.push(quote_spanned! {mode.span()=>
			.name_as_value(::enhance_enum::NameAsValue::from_attr(#mode))
		});
	}
	if let Some(field) = &options.desc_field {
		setters.push(quote! { .desc_field(#field) });
	}
	if let Some(field) = &options.group_field {
		setters.push(quote! { .group_field(#field) });
	}
	setters
}

fn parse_variant(ident: &Ident, attrs: &[Attribute]) -> syn::Result<VariantDef> {
	let mut name: Option<String> = None;
	let mut entries: Vec<(String, TokenStream2)> = Vec::new();

	for attr in attrs.iter().filter(|a| a.path().is_ident("enhance")) {
		attr.parse_nested_meta(|meta| {
			let key = meta.path.require_ident()?.to_string();
			let expr: Expr = meta.value()?.parse()?;

			if key == "rename" {
				let Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) = &expr else {
					return Err(syn::Error::new_spanned(&expr, "rename must be a string literal"));
				};
				if lit.value().is_empty() {
					return Err(syn::Error::new_spanned(lit, "rename must not be empty"));
				}
				if name.is_some() {
					return Err(meta.error("attribute given more than once"));
				}
				name = Some(lit.value());
				return Ok(());
			}

			if entries.iter().any(|(k, _)| *k == key) {
				return Err(meta.error(format!("duplicate field `{key}`")));
			}
			entries.push((key, field_value(&expr)?));
			Ok(())
		})?;
	}

	Ok(VariantDef {
		ident: ident.clone(),
		name: name.unwrap_or_else(|| ident.to_string()),
		entries,
	})
}

/// Converts a literal attribute value into a `FieldValue` constructor.
fn field_value(expr: &Expr) -> syn::Result<TokenStream2> {
	let unsupported =
		|| syn::Error::new_spanned(expr, "field values must be string, integer, bool or char literals");

	match expr {
		Expr::Lit(ExprLit { lit, .. }) => match lit {
			Lit::Str(s) => Ok(quote! { ::enhance_enum::FieldValue::text(#s) }),
			Lit::Bool(b) => Ok(quote! { ::enhance_enum::FieldValue::Bool(#b) }),
			Lit::Char(c) => Ok(quote! { ::enhance_enum::FieldValue::Char(#c) }),
			Lit::Int(int) => {
				if let Ok(n) = int.base10_parse::<i64>() {
					Ok(quote! { ::enhance_enum::FieldValue::Int(#n) })
				} else {
					let n: u64 = int.base10_parse()?;
					Ok(quote! { ::enhance_enum::FieldValue::UInt(#n) })
				}
			}
			_ => Err(unsupported()),
		},
		Expr::Unary(ExprUnary {
			op: UnOp::Neg(_),
			expr: inner,
			..
		}) => {
			let Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) = inner.as_ref() else {
				return Err(unsupported());
			};
			let n: i64 = format!("-{}", int.base10_digits())
				.parse()
				.map_err(|_| syn::Error::new_spanned(expr, "integer out of range for i64"))?;
			Ok(quote! { ::enhance_enum::FieldValue::Int(#n) })
		}
		_ => Err(unsupported()),
	}
}
