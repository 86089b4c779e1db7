//! Generation tickets for in-flight catalog requests
//!
//! Every flow type keeps a counter of issued requests. A response is applied
//! only when its ticket carries the latest generation of its flow; anything
//! older is stale and dropped without touching the views.

use std::fmt;

/// The kinds of asynchronous flows the app runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Search,
    Series,
    Movie,
    /// Trailer key lookup by movie id
    Trailer,
}

impl FlowKind {
    pub const ALL: [FlowKind; 4] = [
        FlowKind::Search,
        FlowKind::Series,
        FlowKind::Movie,
        FlowKind::Trailer,
    ];

    /// Whether an outstanding request of this kind shows the loading indicator
    pub fn shows_loading(&self) -> bool {
        !matches!(self, FlowKind::Trailer)
    }

    fn index(&self) -> usize {
        match self {
            FlowKind::Search => 0,
            FlowKind::Series => 1,
            FlowKind::Movie => 2,
            FlowKind::Trailer => 3,
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowKind::Search => "search",
            FlowKind::Series => "series",
            FlowKind::Movie => "movie",
            FlowKind::Trailer => "trailer",
        };
        f.write_str(name)
    }
}

/// Stamp attached to a request when it is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: FlowKind,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    issued: u64,
    outstanding: bool,
}

/// Per-flow generation counters
#[derive(Debug, Default)]
pub struct FlowTracker {
    slots: [Slot; 4],
}

impl FlowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one of the same kind
    pub fn issue(&mut self, kind: FlowKind) -> Ticket {
        let slot = &mut self.slots[kind.index()];
        slot.issued += 1;
        slot.outstanding = true;
        Ticket {
            kind,
            generation: slot.issued,
        }
    }

    /// Settle a completed request.
    ///
    /// Returns `true` when the response must be applied. Stale or already
    /// settled tickets return `false` and leave the tracker unchanged.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        let slot = &mut self.slots[ticket.kind.index()];
        if ticket.generation != slot.issued || !slot.outstanding {
            return false;
        }
        slot.outstanding = false;
        true
    }

    /// Supersede the outstanding request of `kind`, if there is one
    pub fn invalidate(&mut self, kind: FlowKind) {
        let slot = &mut self.slots[kind.index()];
        if slot.outstanding {
            slot.issued += 1;
            slot.outstanding = false;
        }
    }

    /// Supersede every outstanding request
    pub fn invalidate_all(&mut self) {
        for kind in FlowKind::ALL {
            self.invalidate(kind);
        }
    }

    pub fn is_outstanding(&self, kind: FlowKind) -> bool {
        self.slots[kind.index()].outstanding
    }

    /// Whether the loading indicator should be visible
    pub fn is_loading(&self) -> bool {
        FlowKind::ALL
            .iter()
            .any(|kind| kind.shows_loading() && self.is_outstanding(*kind))
    }
}
