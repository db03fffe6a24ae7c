//! Utility macros.

/// Implements a binary operator on [`Hamilton`](crate::Hamilton) for every
/// owned/borrowed operand combination, together with its assigning form.
///
/// The assigning form evaluates the full result from copies of both operands
/// before storing it, so `z op= z` is well defined.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident,
        $op_assign:ident, $method_assign:ident,
        $rhs_ty:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a> ::std::ops::$op<&'a $rhs_ty> for &'a $crate::Hamilton {
            type Output = $crate::Hamilton;

            #[inline]
            fn $method(self, rhs: &'a $rhs_ty) -> Self::Output {
                let $lhs: $crate::Hamilton = *self;
                let $rhs: $rhs_ty = *rhs;
                $body
            }
        }

        impl ::std::ops::$op<$rhs_ty> for &$crate::Hamilton {
            type Output = $crate::Hamilton;

            #[inline]
            fn $method(self, rhs: $rhs_ty) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $rhs_ty> for $crate::Hamilton {
            type Output = $crate::Hamilton;

            #[inline]
            fn $method(self, rhs: &'a $rhs_ty) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl ::std::ops::$op<$rhs_ty> for $crate::Hamilton {
            type Output = $crate::Hamilton;

            #[inline]
            fn $method(self, rhs: $rhs_ty) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }

        impl ::std::ops::$op_assign<&$rhs_ty> for $crate::Hamilton {
            #[inline]
            fn $method_assign(&mut self, rhs: &$rhs_ty) {
                *self = ::std::ops::$op::$method(&*self, rhs);
            }
        }

        impl ::std::ops::$op_assign<$rhs_ty> for $crate::Hamilton {
            #[inline]
            fn $method_assign(&mut self, rhs: $rhs_ty) {
                *self = ::std::ops::$op::$method(&*self, &rhs);
            }
        }
    };
}

/// Implements `AbsDiffEq` and `RelativeEq` by comparing the four real
/// components pairwise.
macro_rules! impl_componentwise_approx_eq {
    ($t:ty) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let (a, b, c, d) = self.cartesian();
                let (e, f, g, h) = other.cartesian();
                [(a, e), (b, f), (c, g), (d, h)]
                    .iter()
                    .all(|(x, y)| ::approx::AbsDiffEq::abs_diff_eq(x, y, epsilon))
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let (a, b, c, d) = self.cartesian();
                let (e, f, g, h) = other.cartesian();
                [(a, e), (b, f), (c, g), (d, h)].iter().all(|(x, y)| {
                    ::approx::RelativeEq::relative_eq(x, y, epsilon, max_relative)
                })
            }
        }
    };
}
