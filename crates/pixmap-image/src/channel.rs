/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module encapsulates a single image channel instance
//!
//! A channel owns the samples of one color plane exclusively, it is
//! never shared between two images. Ownership moves with the channel,
//! so there is no pairing of manual allocation and release calls, a
//! replaced channel simply drops.
use std::fmt::{Debug, Formatter};

/// Encapsulates errors that can occur
/// when manipulating channels
#[derive(Copy, Clone)]
pub enum ChannelErrors {
    /// The backing storage for the requested sample count could not
    /// be allocated
    AllocationFailed(usize)
}

impl Debug for ChannelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelErrors::AllocationFailed(length) => {
                writeln!(f, "Could not allocate a channel of {length} samples")
            }
        }
    }
}

/// Encapsulates an image channel
///
/// A channel stores the samples of a single color plane as a flat
/// row-major buffer, its shape lives with the image that owns it so
/// that all channels of one image always agree on it.
#[derive(Clone, Eq, PartialEq)]
pub struct Channel {
    data: Vec<u8>
}

impl Channel {
    /// Create a zero filled channel holding `length` samples
    ///
    /// Unlike plain vector construction a failure to acquire the
    /// backing storage is reported instead of aborting the process.
    pub fn try_new(length: usize) -> Result<Channel, ChannelErrors> {
        let mut data = Vec::new();

        data.try_reserve_exact(length)
            .map_err(|_| ChannelErrors::AllocationFailed(length))?;
        data.resize(length, 0);

        Ok(Channel { data })
    }

    /// Wrap an existing sample buffer into a channel
    pub fn from_vec(data: Vec<u8>) -> Channel {
        Channel { data }
    }

    /// Number of samples in this channel
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return an immutable view of the samples
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Return a mutable view of the samples
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Debug for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Channel")
            .field("length", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Channel;

    #[test]
    fn new_channel_is_zeroed() {
        let channel = Channel::try_new(16).unwrap();

        assert_eq!(channel.len(), 16);
        assert!(channel.as_slice().iter().all(|x| *x == 0));
    }

    #[test]
    fn channels_compare_by_contents() {
        let a = Channel::from_vec(vec![1, 2, 3]);
        let b = Channel::from_vec(vec![1, 2, 3]);

        assert_eq!(a, b);
        assert_ne!(a, Channel::from_vec(vec![3, 2, 1]));
    }
}
