// ABOUTME: Onboarding wizard - step state machine and rendering component

pub mod component;
pub mod state;

pub use component::OnboardingComponent;
pub use state::{
    ConsentPath, OnboardingState, OnboardingStep, PersonalField, PinField, StepTransition,
};
