//! Typed sets of channels.
//!
//! Permission masks and filter state are unions of channels. They are backed
//! by a `u16`, but the channel kind is part of the type: a set of incoming
//! channels ([`ChatMask`]) cannot be tested against a selectable channel, and
//! vice versa.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Sub};

use crate::channel::{ChannelFlag, ChatChannel, SelectChannel};

/// Set of incoming channels (filterable mask, active filters).
pub type ChatMask = ChannelSet<ChatChannel>;

/// Set of selectable channels (selectable mask).
pub type SelectMask = ChannelSet<SelectChannel>;

/// A fixed-width set of channel flags of one kind.
pub struct ChannelSet<C: ChannelFlag> {
    bits: u16,
    _kind: PhantomData<C>,
}

impl<C: ChannelFlag> ChannelSet<C> {
    /// The empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _kind: PhantomData,
        }
    }

    /// Every channel of this kind.
    pub fn all() -> Self {
        C::ALL.iter().copied().collect()
    }

    /// Build a set from raw bits, dropping bits no channel occupies.
    pub fn from_bits_truncate(bits: u16) -> Self {
        Self {
            bits: bits & Self::all().bits,
            _kind: PhantomData,
        }
    }

    /// Raw bit representation.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// True if no channel is in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Membership test.
    #[inline]
    pub fn contains(self, channel: C) -> bool {
        self.bits & channel.bit() != 0
    }

    /// Add a channel.
    #[inline]
    pub fn insert(&mut self, channel: C) {
        self.bits |= channel.bit();
    }

    /// Remove a channel.
    #[inline]
    pub fn remove(&mut self, channel: C) {
        self.bits &= !channel.bit();
    }

    /// Add or remove a channel depending on `on`.
    pub fn set(&mut self, channel: C, on: bool) {
        if on {
            self.insert(channel);
        } else {
            self.remove(channel);
        }
    }

    /// Copy of this set with `channel` added.
    #[must_use]
    pub fn with(mut self, channel: C) -> Self {
        self.insert(channel);
        self
    }

    /// Copy of this set with `channel` removed.
    #[must_use]
    pub fn without(mut self, channel: C) -> Self {
        self.remove(channel);
        self
    }

    /// Channels in either set.
    #[inline]
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            _kind: PhantomData,
        }
    }

    /// Channels in both sets.
    #[inline]
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
            _kind: PhantomData,
        }
    }

    /// Channels in `self` but not in `other`.
    #[inline]
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
            _kind: PhantomData,
        }
    }

    /// Number of channels in the set.
    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate the members in bit order.
    pub fn iter(self) -> impl Iterator<Item = C> {
        C::ALL.iter().copied().filter(move |c| self.contains(*c))
    }
}

impl<C: ChannelFlag> Clone for ChannelSet<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ChannelFlag> Copy for ChannelSet<C> {}

impl<C: ChannelFlag> Default for ChannelSet<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: ChannelFlag> PartialEq for ChannelSet<C> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<C: ChannelFlag> Eq for ChannelSet<C> {}

impl<C: ChannelFlag> Hash for ChannelSet<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<C: ChannelFlag> fmt::Debug for ChannelSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.name())).finish()
    }
}

impl<C: ChannelFlag> From<C> for ChannelSet<C> {
    fn from(channel: C) -> Self {
        Self::empty().with(channel)
    }
}

impl<C: ChannelFlag> FromIterator<C> for ChannelSet<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut set = Self::empty();
        for channel in iter {
            set.insert(channel);
        }
        set
    }
}

impl<C: ChannelFlag> BitOr for ChannelSet<C> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<C: ChannelFlag> BitOr<C> for ChannelSet<C> {
    type Output = Self;

    fn bitor(self, rhs: C) -> Self {
        self.with(rhs)
    }
}

impl<C: ChannelFlag> BitAnd for ChannelSet<C> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<C: ChannelFlag> Sub for ChannelSet<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

#[cfg(feature = "serde")]
impl<C> serde::Serialize for ChannelSet<C>
where
    C: ChannelFlag + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, C> serde::Deserialize<'de> for ChannelSet<C>
where
    C: ChannelFlag + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let channels = Vec::<C>::deserialize(deserializer)?;
        Ok(channels.into_iter().collect())
    }
}
