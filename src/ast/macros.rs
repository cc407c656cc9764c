//! The facade generator.
//!
//! `org_ast!` takes the whole schema in one declarative invocation (type
//! name, accepted kinds, relations and flags) and expands each entry into
//! the facade struct, its `AstNode` impl, span accessors and one method per
//! relation. The same invocation also emits the
//! [`SchemaEntry`](crate::schema::SchemaEntry) table, so registry and
//! generated types cannot drift apart, and a relation naming a missing
//! target type fails to compile.
//!
//! Relation grammar, one per line inside an entry's braces:
//!
//! ```text
//! token       method -> TOKEN_KIND;    first matching child token
//! last_token  method -> TOKEN_KIND;    last matching child token
//! parent      method -> TargetType;    immediate parent, if it casts
//! first_child method -> TargetType;    first matching child node
//! last_child  method -> TargetType;    last matching child node
//! children    method -> TargetType;    lazy sequence of matching children
//! pre_blank;  post_blank;              blank-line trivia counters
//! affiliated_keywords;                 caption/header/name/plot/results/attr
//! ```

macro_rules! org_ast {
    ($(
        $(#[$meta:meta])*
        $name:ident($($kind:ident)|+) { $($body:tt)* }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name {
                pub(crate) syntax: $crate::syntax::SyntaxNode,
            }

            impl rowan::ast::AstNode for $name {
                type Language = $crate::syntax::OrgLanguage;

                fn can_cast(kind: $crate::syntax::SyntaxKind) -> bool {
                    matches!(kind, $($crate::syntax::SyntaxKind::$kind)|+)
                }

                fn cast(syntax: $crate::syntax::SyntaxNode) -> Option<Self> {
                    Self::can_cast(syntax.kind()).then(|| $name { syntax })
                }

                fn syntax(&self) -> &$crate::syntax::SyntaxNode {
                    &self.syntax
                }
            }

            impl $name {
                /// Start offset in the source text.
                pub fn begin(&self) -> u32 {
                    self.syntax.text_range().start().into()
                }

                /// End offset in the source text.
                pub fn end(&self) -> u32 {
                    self.syntax.text_range().end().into()
                }
            }

            org_ast!(@relations $name, $($body)*);
        )+

        pub(crate) static REGISTRY: &[$crate::schema::SchemaEntry] = &[
            $(
                $crate::schema::SchemaEntry {
                    name: stringify!($name),
                    kinds: &[$($crate::syntax::SyntaxKind::$kind),+],
                },
            )+
        ];
    };

    (@relations $name:ident,) => {};

    (@relations $name:ident, token $method:ident -> $kind:ident; $($rest:tt)*) => {
        impl $name {
            pub fn $method(&self) -> Option<$crate::syntax::SyntaxToken> {
                rowan::ast::support::token(&self.syntax, $crate::syntax::SyntaxKind::$kind)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, last_token $method:ident -> $kind:ident; $($rest:tt)*) => {
        impl $name {
            pub fn $method(&self) -> Option<$crate::syntax::SyntaxToken> {
                $crate::syntax::support::last_token(&self.syntax, $crate::syntax::SyntaxKind::$kind)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, parent $method:ident -> $target:ident; $($rest:tt)*) => {
        impl $name {
            pub fn $method(&self) -> Option<$target> {
                self.syntax.parent().and_then(<$target as rowan::ast::AstNode>::cast)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, first_child $method:ident -> $target:ident; $($rest:tt)*) => {
        impl $name {
            pub fn $method(&self) -> Option<$target> {
                rowan::ast::support::child::<$target>(&self.syntax)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, last_child $method:ident -> $target:ident; $($rest:tt)*) => {
        impl $name {
            pub fn $method(&self) -> Option<$target> {
                $crate::syntax::support::last_child::<$target>(&self.syntax)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, children $method:ident -> $target:ident; $($rest:tt)*) => {
        impl $name {
            pub fn $method(&self) -> rowan::ast::AstChildren<$target> {
                rowan::ast::support::children::<$target>(&self.syntax)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, pre_blank; $($rest:tt)*) => {
        impl $name {
            /// Blank lines immediately preceding the node's content.
            pub fn pre_blank(&self) -> usize {
                $crate::syntax::support::blank_lines(&self.syntax)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, post_blank; $($rest:tt)*) => {
        impl $name {
            /// Blank lines immediately following the node's content.
            pub fn post_blank(&self) -> usize {
                $crate::syntax::support::blank_lines(&self.syntax)
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };

    (@relations $name:ident, affiliated_keywords; $($rest:tt)*) => {
        impl $name {
            pub fn caption(&self) -> Option<$crate::ast::AffiliatedKeyword> {
                $crate::ast::affiliated_keyword(&self.syntax, |key| key == "CAPTION")
            }

            pub fn header(&self) -> Option<$crate::ast::AffiliatedKeyword> {
                $crate::ast::affiliated_keyword(&self.syntax, |key| key == "HEADER")
            }

            pub fn name(&self) -> Option<$crate::ast::AffiliatedKeyword> {
                $crate::ast::affiliated_keyword(&self.syntax, |key| key == "NAME")
            }

            pub fn plot(&self) -> Option<$crate::ast::AffiliatedKeyword> {
                $crate::ast::affiliated_keyword(&self.syntax, |key| key == "PLOT")
            }

            pub fn results(&self) -> Option<$crate::ast::AffiliatedKeyword> {
                $crate::ast::affiliated_keyword(&self.syntax, |key| key == "RESULTS")
            }

            /// `#+ATTR_<backend>:` keyword; the backend must match the
            /// remainder after the literal `ATTR_` prefix exactly.
            pub fn attr(&self, backend: &str) -> Option<$crate::ast::AffiliatedKeyword> {
                $crate::ast::affiliated_keyword(&self.syntax, |key| {
                    key.strip_prefix("ATTR_").map_or(false, |rest| rest == backend)
                })
            }
        }
        org_ast!(@relations $name, $($rest)*);
    };
}

pub(crate) use org_ast;
