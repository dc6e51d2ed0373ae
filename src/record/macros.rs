/// Implements [`Record`](crate::Record) for a `Serialize` type.
///
/// Attributes come from the type's serde representation. `hidden` names
/// fields left out of the structured value (they stay readable through
/// `attribute`). `methods` lists zero-argument inherent methods that become
/// callable by name; their return type must convert into [`Value`](crate::Value).
///
/// A value that fails to serialize presents as an empty record, and the
/// failure is reported as a `tracing` warning.
///
/// ```
/// use presentable::{Record, serde_record};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User {
///     firstname: String,
///     lastname: String,
///     password: String,
/// }
///
/// impl User {
///     fn fullname(&self) -> String {
///         format!("{} {}", self.firstname, self.lastname)
///     }
/// }
///
/// serde_record!(User, hidden = ["password"], methods = [fullname]);
///
/// let user = User {
///     firstname: "John".into(),
///     lastname: "Doe".into(),
///     password: "secret".into(),
/// };
/// assert!(!user.to_attributes().contains_key("password"));
/// assert_eq!(user.call("fullname", &[]).unwrap(), "John Doe");
/// ```
#[macro_export]
macro_rules! serde_record {
    (
        $ty:ty
        $(, hidden = [$($hidden:literal),* $(,)?])?
        $(, methods = [$($method:ident),* $(,)?])?
        $(,)?
    ) => {
        impl $crate::Record for $ty {
            fn attribute(&self, name: &str) -> ::std::option::Option<$crate::Value> {
                $crate::json::record_attributes(self)
                    .and_then(|attributes| attributes.get(name).cloned())
            }

            fn to_attributes(&self) -> $crate::Attributes {
                let hidden: &[&str] = &[$($($hidden),*)?];
                $crate::json::record_attributes(self)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|(name, _)| !hidden.contains(&name.as_str()))
                    .collect()
            }

            fn call(
                &self,
                method: &str,
                args: &[$crate::Value],
            ) -> $crate::Result<$crate::Value> {
                let _ = args;
                match method {
                    $($(stringify!($method) => ::std::result::Result::Ok(
                        $crate::Value::from(self.$method()),
                    ),)*)?
                    _ => ::std::result::Result::Err($crate::PresentError::undefined_method(
                        ::std::any::type_name::<Self>(),
                        method,
                    )),
                }
            }
        }
    };
}
