/// Implement a trait (and its `*Assign` sibling) from std::ops for every permutation of two types
/// as owned and as references.
///
/// Generic parameters of the impls go in brackets in front of the trait name (`[]` for none).
/// Within the bodies, call `.to_owned()` on the operands so the same expression works for both
/// the owned and the borrowed variants.
#[macro_export]
macro_rules! impl_op {
  // Implement $Op for each pair in [($Lhs, $Rhs), ($Lhs, &$Rhs), (&$Lhs, $Rhs), (&$Lhs, &$Rhs)]
  (. [$($gen:tt)*] $Op:ident, $op:ident -> $Result:ty;
    $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty;
    $act:expr) => {
      impl<$($gen)*> ::core::ops::$Op<$Rhs> for $Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: $Rhs) -> Self::Output {
              $act
          }
      }
      impl<$($gen)*> ::core::ops::$Op<$Rhs> for &$Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: $Rhs) -> Self::Output {
              $act
          }
      }
      impl<$($gen)*> ::core::ops::$Op<&$Rhs> for $Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: &$Rhs) -> Self::Output {
              $act
          }
      }
      impl<$($gen)*> ::core::ops::$Op<&$Rhs> for &$Lhs {
          type Output = $Result;
          #[inline]
          fn $op($lhs, $rhs: &$Rhs) -> Self::Output {
              $act
          }
      }
  };
  // Implement $OpAssign for $Lhs over [$Rhs, &$Rhs]
  (= [$($gen:tt)*] $Assign:ident, $assign:ident;
    $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty;
    $act:expr) => {
      impl<$($gen)*> ::core::ops::$Assign<$Rhs> for $Lhs {
          #[inline]
          fn $assign(&mut $lhs, $rhs: $Rhs) {
              $act
          }
      }
      impl<$($gen)*> ::core::ops::$Assign<&$Rhs> for $Lhs {
          #[inline]
          fn $assign(&mut $lhs, $rhs: &$Rhs) {
              $act
          }
      }
  };
  ([$($gen:tt)*] $Op:ident, $op:ident -> $Result:ty, $Assign:ident, $assign:ident;
    $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty;
    $op_act:expr;
    $assign_act:expr
    ) => {
      $crate::impl_op!(. [$($gen)*] $Op, $op -> $Result; $lhs: $Lhs, $rhs: $Rhs; $op_act);
      $crate::impl_op!(= [$($gen)*] $Assign, $assign; $lhs: $Lhs, $rhs: $Rhs; $assign_act);
  };
  // Same as above, where the output type is $Lhs.
  ([$($gen:tt)*] $Op:ident, $op:ident, $Assign:ident, $assign:ident;
    $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty;
    $op_act:expr;
    $assign_act:expr
    ) => {
      $crate::impl_op!{[$($gen)*] $Op, $op -> $Lhs, $Assign, $assign; $lhs: $Lhs, $rhs: $Rhs; $op_act; $assign_act}
  };
}

#[macro_export]
macro_rules! impl_add_sub {
    ([$($gen:tt)*] $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty; ($add:expr; $add_asn:expr); ($sub:expr; $sub_asn:expr)) => {
        $crate::impl_op! {[$($gen)*] Add, add, AddAssign, add_assign; $lhs: $Lhs, $rhs: $Rhs; $add; $add_asn}
        $crate::impl_op! {[$($gen)*] Sub, sub, SubAssign, sub_assign; $lhs: $Lhs, $rhs: $Rhs; $sub; $sub_asn}
    };
}

#[macro_export]
macro_rules! impl_mul_div {
    ([$($gen:tt)*] $lhs:ident: $Lhs:ty, $rhs:ident: $Rhs:ty; ($mul:expr; $mul_asn:expr); ($div:expr; $div_asn:expr)) => {
        $crate::impl_op! {[$($gen)*] Mul, mul, MulAssign, mul_assign; $lhs: $Lhs, $rhs: $Rhs; $mul; $mul_asn}
        $crate::impl_op! {[$($gen)*] Div, div, DivAssign, div_assign; $lhs: $Lhs, $rhs: $Rhs; $div; $div_asn}
    };
}
