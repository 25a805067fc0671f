use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};
use serial_test::serial;

#[test]
#[serial]
fn given_absolute_storage_file_when_validate_then_error_mentions_relative() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("EH_STORAGE_FILE", "/etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("relative"));
}

#[test]
#[serial]
fn given_path_traversal_in_storage_file_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("EH_STORAGE_FILE", "../../storage.json");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}
