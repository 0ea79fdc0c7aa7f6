/// Helper macro to build an input processor out of a value which is already
/// parseable.
///
/// The block converts the parsed value and may fail with an
/// [`ErrorKind`](crate::input::ErrorKind), in which case the input is rewound
/// and the error spans everything that was consumed.
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ident $block:block) => {
        impl<'a> $crate::input::FromInput<'a> for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr<'a>,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = $crate::input::FromInput::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$value: $ty| -> core::result::Result<$out, $crate::input::ErrorKind> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(kind) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(span, kind))
                    }
                }
            }
        }
    };
}
