pub mod rsvp;

pub use rsvp::{
    Attendance,
    Companion,
    DaysSelection,
    MealChoice,
    RsvpRequest,
    RsvpResponse,
    RsvpSubmission,
};
