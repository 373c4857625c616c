/// Duplicate an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` for each
/// type `$Ty`, making it available within `$imp` under the alias `$Alias`.
///
/// Mostly useful for operator impls over primitive scalars, where a blanket impl over `T` would
/// collide with the vector-vector impls.
#[macro_export]
macro_rules! item_with {
    {$Alias:ident: $($Ty:ty),+ => $imp:item} => {
        $(
            const _: () = { // anonymous module
                type $Alias = $Ty;
                $imp
            };
        )+
    };
}
