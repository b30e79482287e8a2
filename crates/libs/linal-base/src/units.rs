//! Angle quantities tagged with their unit.

macro_rules! impl_serialization {
    ($t:ty where $unit:ident: $unit_trait:ident, #[$doc:meta]) => {
        #[$doc]
        impl<$unit: $unit_trait> serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&format!("{}", self))
            }
        }
    };
}

macro_rules! impl_ops {
    ($($op:ident),* for $t:ident where $unit_a:ident, $unit_b:ident: $unit_trait:ident) => {
        paste::paste! {
            $(
                impl<$unit_a: $unit_trait, $unit_b: $unit_trait> core::ops::$op<$t<$unit_b>> for $t<$unit_a>
                where $t<$unit_a>: From<$t<$unit_b>>
                {
                    type Output = $t<$unit_a>;

                    fn [<$op:lower>](self, rhs: $t<$unit_b>) -> Self::Output {
                        let rhs: $t<$unit_a> = rhs.into();
                        $t::new(core::ops::$op::[<$op:lower>](self.value, rhs.value))
                    }
                }
            )*
        }
    };
}

macro_rules! impl_ops_with_f32 {
    ($($op:ident),* for $t:ident where $unit:ident: $unit_trait:ident) => {
        paste::paste! {
            $(
                impl<$unit: $unit_trait> core::ops::$op<f32> for $t<$unit> {
                    type Output = $t<$unit>;

                    fn [<$op:lower>](self, rhs: f32) -> Self::Output {
                        $t::new(core::ops::$op::[<$op:lower>](self.value, rhs))
                    }
                }

                impl<$unit: $unit_trait> core::ops::[<$op Assign>]<f32> for $t<$unit> {
                    fn [<$op:lower _assign>](&mut self, rhs: f32) {
                        core::ops::[<$op Assign>]::[<$op:lower _assign>](&mut self.value, rhs);
                    }
                }
            )*
        }
    };
}

macro_rules! impl_ops_assign {
    ($($op:ident),* for $t:ident where $unit_a:ident, $unit_b:ident: $unit_trait:ident) => {
        paste::paste! {
            $(
                impl<$unit_a: $unit_trait, $unit_b: $unit_trait> core::ops::$op<$t<$unit_b>> for $t<$unit_a>
                where $t<$unit_a>: From<$t<$unit_b>>
                {
                    fn [<$op:snake>](&mut self, rhs: $t<$unit_b>) {
                        let rhs: $t<$unit_a> = rhs.into();
                        core::ops::$op::[<$op:snake>](&mut self.value, rhs.value);
                    }
                }
            )*
        }
    };
}

mod angle;

pub use angle::*;

/// Returns the index right after the last non-alphabetic byte, i.e. the
/// start of the trailing unit symbol. `None` if every byte is alphabetic.
fn findr_first_non_ascii_alphabetic(s: &[u8]) -> Option<usize> {
    let mut i = s.len();
    while i > 0 {
        if s[i - 1].is_ascii_alphabetic() {
            i -= 1;
        } else {
            return Some(i);
        }
    }
    None
}
