//! Proc-macros for the seo-helper configuration system.
//!
//! Provides a derive macro that turns a struct of optional fields into a
//! layered record: key-based overrides, loosely-typed value assignment and a
//! shallow, field-wise merge.

use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, parse_macro_input};

/// Attribute configuration for a field.
#[derive(Default)]
struct FieldConfig {
  /// The external key name (defaults to field name).
  key: Option<String>,

  /// Whether the field is handled by hand and ignored by the derive.
  skip: bool,
}

impl FieldConfig {
  fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
    let mut config = Self::default();

    for attr in attrs {
      if !attr.path().is_ident("config") {
        continue;
      }

      attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("key") {
          let value = meta.value()?;
          let lit: syn::LitStr = value.parse()?;
          config.key = Some(lit.value());
          Ok(())
        } else if meta.path.is_ident("skip") {
          config.skip = true;
          Ok(())
        } else {
          Err(meta.error("unsupported config attribute"))
        }
      })?;
    }

    Ok(config)
  }
}

/// A field that takes part in the generated code.
struct LayeredField<'a> {
  ident: &'a syn::Ident,
  key:   String,
}

/// Derive macro for layered records.
///
/// Every field must be an `Option<T>` where `T` implements the crate-local
/// `loose::Loose` trait, unless it is marked `#[config(skip)]`. The deriving
/// crate must expose `crate::error::ConfigError` and `crate::loose::Loose`.
#[proc_macro_derive(Configurable, attributes(config))]
pub fn derive_configurable(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) =
    input.generics.split_for_impl();

  let fields = match &input.data {
    Data::Struct(data) => &data.fields,
    _ => {
      return syn::Error::new_spanned(
        input,
        "Configurable can only be derived for structs",
      )
      .to_compile_error()
      .into();
    },
  };

  let layered = match collect_fields(fields) {
    Ok(layered) => layered,
    Err(e) => return e.to_compile_error().into(),
  };

  let keys = layered.iter().map(|f| f.key.as_str());
  let override_handlers = layered.iter().map(generate_override_handler);
  let value_handlers = layered.iter().map(generate_value_handler);
  let merge_handlers = layered.iter().map(generate_merge_handler);

  let expanded = quote! {
    impl #impl_generics #name #ty_generics #where_clause {
      /// Keys understood by [`Self::apply_override`], in declaration order.
      pub const KEYS: &'static [&'static str] = &[#(#keys),*];

      /// Apply an override given as a string value.
      pub fn apply_override(
        &mut self,
        key: &str,
        value: &str,
      ) -> std::result::Result<(), crate::error::ConfigError> {
        use crate::error::ConfigError;

        #(#override_handlers)*

        Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for supported keys.",
        )))
      }

      /// Apply a loosely-typed value by key.
      ///
      /// Returns `false` if the key is not a known field.
      pub fn apply_value(
        &mut self,
        key: &str,
        value: &::serde_json::Value,
      ) -> bool {
        #(#value_handlers)*

        false
      }

      /// Shallow merge: every field set in `other` replaces ours.
      pub fn merge_fields(&mut self, other: Self) {
        #(#merge_handlers)*
      }
    }
  };

  TokenStream::from(expanded)
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<LayeredField<'_>>> {
  let mut layered = Vec::new();

  for field in fields {
    let field_config = FieldConfig::from_attrs(&field.attrs)?;
    if field_config.skip {
      continue;
    }

    let Some(ident) = field.ident.as_ref() else {
      return Err(syn::Error::new_spanned(field, "Named field required"));
    };

    if !is_option(field) {
      return Err(syn::Error::new_spanned(
        &field.ty,
        "Configurable fields must be Option<T>; mark others with \
         #[config(skip)]",
      ));
    }

    layered.push(LayeredField {
      ident,
      key: field_config.key.unwrap_or_else(|| ident.to_string()),
    });
  }

  Ok(layered)
}

fn is_option(field: &Field) -> bool {
  let type_str = field.ty.to_token_stream().to_string().replace(' ', "");
  type_str.starts_with("Option<")
}

fn generate_override_handler(
  field: &LayeredField<'_>,
) -> proc_macro2::TokenStream {
  let LayeredField { ident, key } = field;

  quote! {
    if key == #key {
      self.#ident = Some(crate::loose::Loose::parse_override(#key, value)?);
      return Ok(());
    }
  }
}

fn generate_value_handler(field: &LayeredField<'_>) -> proc_macro2::TokenStream {
  let LayeredField { ident, key } = field;

  quote! {
    if key == #key {
      if let Some(parsed) = crate::loose::Loose::from_loose(value) {
        self.#ident = Some(parsed);
      }
      return true;
    }
  }
}

fn generate_merge_handler(field: &LayeredField<'_>) -> proc_macro2::TokenStream {
  let ident = field.ident;

  quote! {
    if other.#ident.is_some() {
      self.#ident = other.#ident;
    }
  }
}
