//! # community-service
//!
//! Application layer containing domain services, the authorization rule
//! engine, and request/response DTOs.

pub mod dto;
pub mod rules;
pub mod services;

pub use rules::{DenyStatus, Policy, Rule, RuleResult};
pub use services::{
    AdminService, CommunityMessageService, DeletedPost, Effect, FieldError, JoinData,
    MembershipService, Outcome, PostService, PrivateMessageService, RequestAction, ServiceContext,
    ServiceError, ServiceResult,
};
