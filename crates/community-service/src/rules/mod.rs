//! Authorization rule engine
//!
//! Authorization is expressed as small named predicates over a context
//! struct instead of boolean expressions inlined in handlers. A rule is a
//! plain function; a [`Policy`] composes rules with AND ([`Policy::check`])
//! or OR ([`Policy::check_any`]) semantics.
//!
//! Rules are synchronous: any lookups a rule needs (admin grants,
//! membership rows) are performed by the service beforehand and carried in
//! the context struct.

pub mod message;
pub mod moderation;

/// Classification attached to a rule rejection, consumed by the
/// error-translation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyStatus {
    /// No verified actor (401)
    Unauthenticated,
    /// Authenticated but not permitted (403)
    Forbidden,
    /// Operation not valid in the current state (400)
    InvalidState,
}

/// Outcome of evaluating a rule or policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleResult {
    Allow,
    Deny {
        reason: &'static str,
        status: DenyStatus,
    },
}

impl RuleResult {
    /// Construct a forbidden rejection
    pub fn forbidden(reason: &'static str) -> Self {
        Self::Deny {
            reason,
            status: DenyStatus::Forbidden,
        }
    }

    /// Construct an invalid-state rejection
    pub fn invalid_state(reason: &'static str) -> Self {
        Self::Deny {
            reason,
            status: DenyStatus::InvalidState,
        }
    }

    #[inline]
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// A rule is a plain predicate over a context struct
pub type Rule<C> = fn(&C) -> RuleResult;

/// Composition of rules evaluated against one context.
///
/// An empty policy allows under both composition modes.
pub struct Policy<'a, C> {
    rules: &'a [Rule<C>],
}

impl<'a, C> Policy<'a, C> {
    pub fn new(rules: &'a [Rule<C>]) -> Self {
        Self { rules }
    }

    /// AND composition: every rule must allow; the first rejection wins.
    pub fn check(&self, ctx: &C) -> RuleResult {
        for rule in self.rules {
            let result = rule(ctx);
            if !result.is_allow() {
                return result;
            }
        }
        RuleResult::Allow
    }

    /// OR composition: allows as soon as any rule allows; when every rule
    /// rejects, the first rejection is returned.
    pub fn check_any(&self, ctx: &C) -> RuleResult {
        let mut first_deny = None;
        for rule in self.rules {
            let result = rule(ctx);
            if result.is_allow() {
                return RuleResult::Allow;
            }
            if first_deny.is_none() {
                first_deny = Some(result);
            }
        }
        first_deny.unwrap_or(RuleResult::Allow)
    }
}
