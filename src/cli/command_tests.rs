/*
 * Unit tests for the command parser
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_parse_bare_commands
 * - test_parse_pickup_up_and_down
 * - test_parse_trims_whitespace
 * - test_parse_rejects_unknown_command
 * - test_parse_rejects_bad_arity
 * - test_parse_rejects_floor_out_of_range
 * - test_parse_respects_configured_building_range
 * - test_parse_rejects_bad_direction
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod command_tests {
    use crate::cli::parse_command;
    use crate::cli::Command;
    use crate::cli::ParseError;
    use crate::config::BuildingConfig;
    use crate::shared::Direction::{Down, Up};

    fn building() -> BuildingConfig {
        BuildingConfig::default()
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_command("status", &building()), Ok(Command::Status));
        assert_eq!(parse_command("step", &building()), Ok(Command::Step));
        assert_eq!(parse_command("exit", &building()), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_pickup_up_and_down() {
        // Act & Assert
        assert_eq!(
            parse_command("pickup 10 1", &building()),
            Ok(Command::Pickup {
                floor: 10,
                direction: Up,
            })
        );
        assert_eq!(
            parse_command("pickup 0 -1", &building()),
            Ok(Command::Pickup {
                floor: 0,
                direction: Down,
            })
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_command("  status \n", &building()), Ok(Command::Status));
        assert_eq!(
            parse_command("pickup  21   1\n", &building()),
            Ok(Command::Pickup {
                floor: 21,
                direction: Up,
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        // Act
        let result = parse_command("launch", &building());

        // Assert
        assert_eq!(result, Err(ParseError::UnknownCommand("launch".to_string())));
    }

    #[test]
    fn test_parse_rejects_bad_arity() {
        assert_eq!(
            parse_command("pickup 3", &building()),
            Err(ParseError::MissingArguments)
        );
        assert_eq!(
            parse_command("pickup 3 1 2", &building()),
            Err(ParseError::MissingArguments)
        );
    }

    #[test]
    fn test_parse_rejects_floor_out_of_range() {
        assert_eq!(
            parse_command("pickup 22 1", &building()),
            Err(ParseError::InvalidFloor("22".to_string()))
        );
        assert_eq!(
            parse_command("pickup -1 1", &building()),
            Err(ParseError::InvalidFloor("-1".to_string()))
        );
    }

    #[test]
    fn test_parse_respects_configured_building_range() {
        // Arrange: a smaller building than the default one.
        let narrow = BuildingConfig {
            min_floor: 1,
            max_floor: 5,
        };

        // Act & Assert
        assert_eq!(
            parse_command("pickup 0 1", &narrow),
            Err(ParseError::InvalidFloor("0".to_string()))
        );
        assert_eq!(
            parse_command("pickup 6 1", &narrow),
            Err(ParseError::InvalidFloor("6".to_string()))
        );
        assert_eq!(
            parse_command("pickup 5 1", &narrow),
            Ok(Command::Pickup {
                floor: 5,
                direction: Up,
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_direction() {
        assert_eq!(
            parse_command("pickup 3 2", &building()),
            Err(ParseError::InvalidDirection("2".to_string()))
        );
        assert_eq!(
            parse_command("pickup 3 up", &building()),
            Err(ParseError::InvalidDirection("up".to_string()))
        );
    }
}
