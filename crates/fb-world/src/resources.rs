//! Shared resource counters.

use std::fmt;

use fb_core::RobotPrice;

/// Stock of every resource in the world.  Counters never go negative: each
/// consuming operation checks before it subtracts.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    pub foo:    u64,
    pub bar:    u64,
    pub foobar: u64,
}

impl Resources {
    pub fn new(foo: u64, bar: u64, foobar: u64) -> Self {
        Self { foo, bar, foobar }
    }

    /// Consume one foo and one bar if both are in stock.
    ///
    /// Returns `false` and leaves the counters untouched otherwise.
    pub fn take_assembly_inputs(&mut self) -> bool {
        if self.foo >= 1 && self.bar >= 1 {
            self.foo -= 1;
            self.bar -= 1;
            true
        } else {
            false
        }
    }

    /// How many robots the current stock pays for.
    ///
    /// A zero price component places no limit.
    #[inline]
    pub fn affordable_robots(&self, price: RobotPrice) -> u64 {
        let by_foobar = self.foobar.checked_div(price.foobar).unwrap_or(u64::MAX);
        let by_foo = self.foo.checked_div(price.foo).unwrap_or(u64::MAX);
        by_foobar.min(by_foo)
    }

    /// Deduct the price of `count` robots.
    ///
    /// Callers bound `count` by [`affordable_robots`](Self::affordable_robots).
    pub(crate) fn pay_for_robots(&mut self, count: u64, price: RobotPrice) {
        self.foobar -= count * price.foobar;
        self.foo -= count * price.foo;
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "foo={} bar={} foobar={}", self.foo, self.bar, self.foobar)
    }
}
