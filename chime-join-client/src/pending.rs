/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Single-resolution handle for a join running on another task.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use chime_join_types::JoinMeetingResponse;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::error::JoinError;

type JoinResult = Result<JoinMeetingResponse, JoinError>;

/// The outcome of a join started with
/// [`JoinRequestService::spawn_join`](crate::JoinRequestService::spawn_join).
///
/// Resolve it either by awaiting it, or by calling [`try_take`](Self::try_take)
/// from a loop the caller owns (a UI frame tick, for instance). Either way
/// the result is handed out once; later attempts yield
/// [`JoinError::AlreadyTaken`].
#[derive(Debug)]
pub struct PendingJoin {
    rx: oneshot::Receiver<JoinResult>,
    taken: bool,
}

impl PendingJoin {
    pub(crate) fn new(rx: oneshot::Receiver<JoinResult>) -> Self {
        Self { rx, taken: false }
    }

    /// Take the result if the join has finished.
    ///
    /// Returns `None` while the request is in flight and on every call after
    /// the result has been taken.
    pub fn try_take(&mut self) -> Option<JoinResult> {
        if self.taken {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(JoinError::Cancelled),
        };
        self.taken = true;
        Some(result)
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }
}

impl Future for PendingJoin {
    type Output = JoinResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        if this.taken {
            return Poll::Ready(Err(JoinError::AlreadyTaken));
        }
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(result) => {
                this.taken = true;
                Poll::Ready(result.unwrap_or(Err(JoinError::Cancelled)))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
