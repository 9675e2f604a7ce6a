// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_scene::{Apartment, ApartmentId};

/// Handler for the overlay's "details" and "reserve" buttons.
///
/// The controller calls these after a transition emits
/// [`Action::ShowDetails`](crate::Action::ShowDetails) or
/// [`Action::Reserve`](crate::Action::Reserve).
pub trait ApartmentService {
    /// Show the full details of `apartment`.
    fn show_details(&mut self, apartment: &Apartment);

    /// Start a reservation of `apartment`.
    fn reserve(&mut self, apartment: &Apartment);
}

/// Which overlay button produced a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// "Подробнее".
    Details,
    /// "Бронь".
    Reservation,
}

impl NoticeKind {
    /// User-facing acknowledgement text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Details => "Показать детали квартиры",
            Self::Reservation => "Забронировать квартиру",
        }
    }
}

/// An acknowledgement the host should show to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// What was requested.
    pub kind: NoticeKind,
    /// For which apartment.
    pub apartment: ApartmentId,
}

impl Notice {
    /// User-facing acknowledgement text.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Default service: queues acknowledgements for the host to display.
#[derive(Clone, Debug, Default)]
pub struct NoticeService {
    notices: Vec<Notice>,
}

impl NoticeService {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending notices, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Removes and returns all pending notices.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn push(&mut self, kind: NoticeKind, apartment: &Apartment) {
        self.notices.push(Notice {
            kind,
            apartment: apartment.id.clone(),
        });
    }
}

impl ApartmentService for NoticeService {
    fn show_details(&mut self, apartment: &Apartment) {
        self.push(NoticeKind::Details, apartment);
    }

    fn reserve(&mut self, apartment: &Apartment) {
        self.push(NoticeKind::Reservation, apartment);
    }
}
