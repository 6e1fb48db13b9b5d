// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
// Each of them derives one ownership combination from the `&a op &b` implementation.
macro_rules! forward_val_val_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    impl<$($bn: $($bs+)*),*> $imp<$res> for $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    impl<'a, $($bn: $($bs+)*),*> $imp<$res> for &'a $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    impl<'b, $($bn: $($bs+)*),*> $imp<&'b $res> for $res {
      type Output = $res;

      fn $method(self, other: &$res) -> $res {
        (&self).$method(other)
      }
    }
  }
}

// Implements the operator `$imp` of a set type with the set operation `$op::$op_method`, for owned and borrowed operands.
macro_rules! set_operator_impl {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident => $op:ident :: $op_method:ident) => {
    impl<'a, 'b, $($bn: $($bs+)*),*> $imp<&'b $res> for &'a $res {
      type Output = $res;

      fn $method(self, other: &'b $res) -> $res {
        $op::$op_method(self, other)
      }
    }

    forward_val_val_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method);
    forward_ref_val_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method);
    forward_val_ref_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method);
  }
}
