//! Intermediate representation of scanned Slack messages.
//!
//! The scanner in [`crate::mrkdwn`] reports what it finds through a listener.
//! [`events::Event`] is the owned, replayable form of those callbacks, used when
//! a message has to be kept around between scanning and rendering.

pub mod events;
