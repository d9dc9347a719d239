//! # seraya-service
//!
//! Application layer: the redemption resolver, event scheduling, winner
//! listings, statistics, admin authentication, DTOs and the winner
//! notifiers.

pub mod dto;
pub mod notifier;
pub mod services;

#[cfg(test)]
mod testing;

pub use dto::{
    AddEventRequest, AdminLoginRequest, EventCreatedResponse, GeneratedLinkResponse,
    HealthChecks, HealthResponse, LinkStatusResponse, NextEventResponse, PublicWinnerResponse,
    ReadinessResponse, ServiceInfoResponse, StatsResponse, SubmissionResponse, SubmitRequest,
    WinnerResponse,
};
pub use notifier::{DisabledNotifier, DiscordWebhookNotifier};
pub use services::{
    AuthService, EventService, RedemptionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, StatsService, WinnerService,
};
