/// Implements [`Describe`](crate::Describe) and [`Field`](crate::Field) for a
/// schema struct from its discriminant and member list.
///
/// Members are emitted in the listed order through
/// [`Encoder::emit_field`](crate::Encoder::emit_field), so each member's
/// declared type decides how it renders and whether it is redacted.
///
/// # Examples
///
/// ```rust
/// use tl_inspect::{describe, to_string, SecretString};
///
/// struct Login {
///     phone: String,
///     code: SecretString,
/// }
///
/// describe!(Login => "login" { phone, code });
///
/// let login = Login {
///     phone: "+100".to_string(),
///     code: SecretString::new("12345"),
/// };
/// let json = to_string(&login).unwrap();
/// assert!(json.contains("\"code\": \"<secret>\""));
/// assert!(!json.contains("12345"));
/// ```
#[macro_export]
macro_rules! describe {
    ($ty:ty => $type_name:literal { $($field:ident),* $(,)? }) => {
        impl $crate::Describe for $ty {
            fn type_name(&self) -> &str {
                $type_name
            }

            #[allow(unused_variables)]
            fn describe_fields(&self, encoder: &mut $crate::Encoder) -> $crate::Result<()> {
                $(
                    encoder.emit_field(stringify!($field), &self.$field)?;
                )*
                Ok(())
            }
        }

        impl $crate::Field for $ty {
            const KIND: $crate::FieldKind = $crate::FieldKind::Compound;

            fn store_field(
                &self,
                encoder: &mut $crate::Encoder,
                name: &str,
            ) -> $crate::Result<()> {
                $crate::Describe::store(self, encoder, name)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{to_string, Bytes, SecretString, UInt128};

    struct Empty;

    struct File {
        id: i32,
        name: String,
        data: Bytes,
    }

    struct Account {
        login: String,
        password: SecretString,
        avatar: Option<Box<File>>,
        files: Vec<File>,
        nonce: UInt128,
    }

    describe!(Empty => "empty" {});
    describe!(File => "file" { id, name, data });
    describe!(Account => "account" { login, password, avatar, files, nonce });

    #[test]
    fn test_describe_empty() {
        assert_eq!(to_string(&Empty).unwrap(), "{\n  \"@type\": \"empty\"\n}");
    }

    #[test]
    fn test_describe_nested() {
        let account = Account {
            login: "bob".to_string(),
            password: SecretString::new("pa55"),
            avatar: None,
            files: vec![File {
                id: 3,
                name: "a.txt".to_string(),
                data: Bytes(b"abc".to_vec()),
            }],
            nonce: UInt128([1; 16]),
        };

        let json = to_string(&account).unwrap();
        let expected = r#"{
  "@type": "account",
  "login": "bob",
  "password": "<secret>",
  "avatar": null,
  "files": [
    {
      "@type": "file",
      "id": 3,
      "name": "a.txt",
      "data": "YWJj"
    }
  ],
  "nonce": "AQEBAQEBAQEBAQEBAQEBAQ=="
}"#;
        assert_eq!(json, expected);
    }
}
