//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod batch_dto;

pub use batch_dto::{
    BatchValidationRequestDto, BatchValidationResponseDto, OrderRequestDto, SlotResultDto,
    SlotStatus,
};
