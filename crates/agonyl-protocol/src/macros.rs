/// Declare a fixed-layout record: a struct whose fields are encoded in declaration order.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::field::Field for $name {
            const SIZE: usize = 0 $( + <$ty as $crate::field::Field>::SIZE )*;

            fn zeroed() -> Self {
                Self {
                    $( $field: <$ty as $crate::field::Field>::zeroed(), )*
                }
            }

            fn read_field<R: std::io::Read>(input: &mut R) -> std::io::Result<Self> {
                $(
                    let $field = <$ty as $crate::field::Field>::read_field(input)?;
                )*
                Ok(Self { $( $field ),* })
            }

            fn write_field<W: std::io::Write>(&self, output: &mut W) -> std::io::Result<()> {
                $(
                    $crate::field::Field::write_field(&self.$field, output)?;
                )*
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as $crate::field::Field>::zeroed()
            }
        }
    };
}

/// Declare a message: a record whose first field, `head`, is a packet header.
macro_rules! message {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        record! {
            $(#[$meta])*
            pub struct $name {
                $($body)*
            }
        }

        impl $crate::Message for $name {
            fn header(&self) -> &$crate::Header {
                self.head.as_ref()
            }

            fn header_mut(&mut self) -> &mut $crate::Header {
                self.head.as_mut()
            }
        }
    };
}
