/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the ring macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a ring with the points given as a list of (x, y) tuples.
///
/// The ring is constructed as given, no closing point is appended. Use
/// [Ring::close](crate::polygon::Ring::close) to explicitly close it.
///
/// # Examples
///
/// ```
/// # use offset_contours::ring;
/// # use offset_contours::core::math::Point;
/// let r = ring![(0.0, 1.0), (2.0, 0.0)];
/// assert!(!r.is_closed());
/// assert_eq!(r[0], Point::new(0.0, 1.0));
/// assert_eq!(r[1], Point::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$( $crate::replace_expr!(($x) ()) ),*]);
            let mut r = $crate::polygon::Ring::with_capacity(size);
            $(
                r.add($x.0, $x.1);
            )*
            r
        }
    };
}
