/*! Integration tests for flatpath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - codec: Tests for the flatten/expand codec and the path encoding
 * - ops: Tests for the projection and extraction operations
 * - value: Tests for the Value, List, and Map model
 */

mod codec;
mod ops;
mod value;
