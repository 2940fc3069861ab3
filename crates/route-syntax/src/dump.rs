//! Test-only dump methods for route tree inspection.
