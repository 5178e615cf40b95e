/// Declares a closed set of named variants, each tied to the exact name used in
/// AFM files and PDF dictionaries.
///
/// Generates `from_name` (returning `None` for unknown names), `name` and an
/// `ALL` constant listing every variant in declaration order.
#[macro_export]
macro_rules! name_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$doc:meta])*
                $variant:ident = $val:literal
            ),*,
            }
    ) => {
        $(#[$attr])*
        $vis enum $name {
            $(
                $(#[$doc])*
                $variant
            ),*,
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub fn from_name(s: &str) -> Option<Self> {
                Some(match s {
                    $($val => Self::$variant),*,
                    _ => return None,
                })
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $val),*,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
