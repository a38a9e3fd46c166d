use lifegrid_lib::{Config, Error as LifeError, Pattern, Simulation, Universe};
use std::error::Error;

/// The standard glider, as a coordinate list.
const GLIDER: [(u32, u32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

#[test]
fn dead_universe_stays_dead() -> Result<(), Box<dyn Error>> {
    let universe = Universe::new(4, 4, false)?;
    let mut simulation = Simulation::new(universe);
    simulation.run(10);
    assert_eq!(simulation.universe().population(), 0);
    assert_eq!(simulation.generation(), 10);
    Ok(())
}

#[test]
fn bounded_census_at_edges() -> Result<(), Box<dyn Error>> {
    // On a fully live 3x3 grid, the census equals the number of
    // candidate neighbor positions: 3 for corners, 5 for edges,
    // 8 for the interior.
    let mut universe = Universe::new(3, 3, false)?;
    universe.populate((0..3).flat_map(|r| (0..3).map(move |c| (r, c))))?;
    assert_eq!(universe.census(0, 0), 3);
    assert_eq!(universe.census(0, 1), 5);
    assert_eq!(universe.census(1, 1), 8);
    Ok(())
}

#[test]
fn toroidal_census_wraps_corner_to_corner() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(3, 3, true)?;
    universe.populate([(0, 0)])?;
    assert_eq!(universe.census(2, 2), 1);
    assert_eq!(universe.census(1, 1), 1);
    // The cell itself is never counted.
    assert_eq!(universe.census(0, 0), 0);
    Ok(())
}

#[test]
fn toroidal_census_sees_all_eight() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(3, 3, true)?;
    universe.populate((0..3).flat_map(|r| (0..3).map(move |c| (r, c))))?;
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(universe.census(r, c), 8);
        }
    }
    Ok(())
}

#[test]
fn toroidal_census_counts_positions_not_cells() -> Result<(), Box<dyn Error>> {
    // On a 1x3 torus, three of the eight offsets from (0, 1) wrap onto
    // the cell at (0, 0); each candidate position counts separately.
    let mut universe = Universe::new(1, 3, true)?;
    universe.populate([(0, 0)])?;
    assert_eq!(universe.census(0, 1), 3);
    Ok(())
}

#[test]
fn get_out_of_range_is_dead() -> Result<(), Box<dyn Error>> {
    let universe = Universe::new(3, 5, false)?;
    assert!(!universe.get(3, 0));
    assert!(!universe.get(0, 5));
    assert!(!universe.get(u32::MAX, u32::MAX));
    Ok(())
}

#[test]
fn populate_out_of_range_fails() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(3, 3, false)?;
    let result = universe.populate([(1, 1), (3, 0)]);
    assert!(matches!(result, Err(LifeError::OutOfBounds((3, 0)))));
    // Pairs before the failing one keep their state.
    assert!(universe.get(1, 1));
    Ok(())
}

#[test]
fn glider_round_trip() -> Result<(), Box<dyn Error>> {
    let pattern: Pattern = "5 5\n0 1\n1 2\n2 0\n2 1\n2 2\n".parse()?;
    let universe = pattern.universe(false)?;
    assert_eq!(
        universe.to_string(),
        ".o...\n\
         ..o..\n\
         ooo..\n\
         .....\n\
         .....\n"
    );
    Ok(())
}

#[test]
fn glider_translates_after_four_generations() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(10, 10, false)?;
    universe.populate(GLIDER)?;
    let mut simulation = Simulation::new(universe);
    simulation.run(4);

    let mut expected = Universe::new(10, 10, false)?;
    expected.populate(GLIDER.iter().map(|&(r, c)| (r + 1, c + 1)))?;
    assert_eq!(simulation.universe(), &expected);
    Ok(())
}

#[test]
fn lone_cell_dies() -> Result<(), Box<dyn Error>> {
    let pattern: Pattern = "3 3\n1 1\n".parse()?;
    let config = Config::new().set_generations(1);
    let mut simulation = config.simulation(&pattern)?;
    simulation.run(config.generations);
    assert_eq!(simulation.universe().to_string(), "...\n...\n...\n");
    Ok(())
}

#[test]
fn plus_shape_becomes_ring() -> Result<(), Box<dyn Error>> {
    // Every corner is born with 3 neighbors, the arms survive with 3,
    // and the center dies with 4.
    let pattern: Pattern = "3 3\n0 1\n1 0\n1 1\n1 2\n2 1\n".parse()?;
    let mut simulation = Config::new().simulation(&pattern)?;
    simulation.step();
    assert_eq!(
        simulation.universe().to_string(),
        "ooo\n\
         o.o\n\
         ooo\n"
    );
    Ok(())
}

#[test]
fn blinker_oscillates() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(5, 5, false)?;
    universe.populate([(2, 1), (2, 2), (2, 3)])?;
    let start = universe.clone();
    let mut simulation = Simulation::new(universe);
    simulation.step();
    assert_eq!(
        simulation.universe().to_string(),
        ".....\n\
         ..o..\n\
         ..o..\n\
         ..o..\n\
         .....\n"
    );
    simulation.step();
    assert_eq!(simulation.universe(), &start);
    Ok(())
}

#[test]
fn toroidal_row_fills_then_dies() -> Result<(), Box<dyn Error>> {
    // On a 3x3 torus, a full row is seen by every other cell three
    // times over, so the whole grid fills and then starves.
    let pattern: Pattern = "3 3\n1 0\n1 1\n1 2\n".parse()?;
    let mut simulation = Config::new().set_toroidal(true).simulation(&pattern)?;
    simulation.step();
    assert_eq!(
        simulation.universe().to_string(),
        "ooo\n\
         ooo\n\
         ooo\n"
    );
    simulation.step();
    assert_eq!(simulation.universe().population(), 0);
    Ok(())
}

#[test]
fn zero_dimension_is_rejected() -> Result<(), Box<dyn Error>> {
    let pattern: Pattern = "0 5\n".parse()?;
    assert!(matches!(
        pattern.universe(false),
        Err(LifeError::NonPositiveError)
    ));
    assert!(matches!(
        Universe::new(5, 0, false),
        Err(LifeError::NonPositiveError)
    ));
    Ok(())
}

#[test]
fn bad_header_is_rejected() {
    assert!(matches!(
        "three 3\n1 1\n".parse::<Pattern>(),
        Err(LifeError::BadHeader(_))
    ));
    assert!(matches!("".parse::<Pattern>(), Err(LifeError::BadHeader(_))));
    assert!(matches!("3\n".parse::<Pattern>(), Err(LifeError::BadHeader(_))));
}

#[test]
fn bad_entry_reports_the_line() {
    let result = "3 3\n1 1\n1 x\n".parse::<Pattern>();
    assert!(matches!(result, Err(LifeError::BadEntry(3, _))));
}

#[test]
fn blank_lines_are_skipped() -> Result<(), Box<dyn Error>> {
    let pattern: Pattern = "\n3 3\n\n1 1\n\n".parse()?;
    assert_eq!(pattern.rows, 3);
    assert_eq!(pattern.cols, 3);
    assert_eq!(pattern.cells, vec![(1, 1)]);
    Ok(())
}

#[test]
fn population_counts_live_cells() -> Result<(), Box<dyn Error>> {
    let mut universe = Universe::new(5, 5, false)?;
    universe.populate(GLIDER)?;
    assert_eq!(universe.population(), 5);
    assert_eq!(
        universe.live_cells().collect::<Vec<_>>(),
        vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
    );
    Ok(())
}
