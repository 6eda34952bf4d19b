//! Data transfer objects for the real-time protocol

pub mod requests;
pub mod responses;

pub use requests::{
    AddMemberRequest, AdminGrantRequest, DeleteCommunityMessageRequest, DeleteMemberRequest,
    DeleteMessageRequest, DeletePostRequest, HandleRequestRequest, LeaveMemberRequest,
    SendCommunityMessageRequest, SendMessageRequest, UpdateCommunityMessageRequest,
    UpdateMessageRequest, UpdatePostRequest,
};
pub use responses::SuccessEnvelope;
