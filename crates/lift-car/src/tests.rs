//! Unit tests for the car state machine.

use lift_core::{CarId, Direction, Heading, RequestId, RequestLedger, Tick};

use crate::{CarError, DoorState, ElevatorCar};

const FLOORS: u32 = 10;

fn car_at(floor: u32, capacity: usize) -> ElevatorCar {
    ElevatorCar::new(CarId(0), floor, capacity)
}

fn ledger_with(pairs: &[(u32, u32)]) -> (RequestLedger, Vec<RequestId>) {
    let mut ledger = RequestLedger::new();
    let ids = pairs
        .iter()
        .map(|&(origin, dest)| ledger.create(origin, dest, Tick(0), FLOORS).unwrap())
        .collect();
    (ledger, ids)
}

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn idle_step_is_a_noop() {
        let mut car = car_at(3, 4);
        car.step();
        assert_eq!(car.floor(), 3);
        assert_eq!(car.heading(), Heading::Idle);
        assert_eq!(car.door(), DoorState::Closed);
    }

    #[test]
    fn moves_one_floor_per_tick_toward_head() {
        let mut car = car_at(0, 4);
        car.enqueue_stop(3, Direction::Up);
        car.step();
        assert_eq!(car.floor(), 1);
        car.step();
        assert_eq!(car.floor(), 2);
        assert_eq!(car.heading(), Heading::Up);
    }

    #[test]
    fn opens_door_on_arrival_at_head() {
        let mut car = car_at(0, 4);
        car.enqueue_stop(1, Direction::Up);
        car.step();
        assert_eq!(car.floor(), 1);
        assert_eq!(car.door(), DoorState::Open);
        assert!(car.at_stop());
    }

    #[test]
    fn open_door_closes_at_start_of_next_step() {
        let (mut ledger, ids) = ledger_with(&[(1, 3)]);
        let mut car = car_at(0, 4);
        car.enqueue_stop(1, Direction::Up);
        car.step(); // arrive at 1, door opens
        car.unload_arrivals(&mut ledger, Tick(1)).unwrap();
        car.load_from(ids, &ledger).unwrap();
        assert_eq!(car.door(), DoorState::Open);

        car.step(); // door closes, then the car moves
        assert_eq!(car.door(), DoorState::Closed);
        assert_eq!(car.floor(), 2);
    }

    #[test]
    fn idle_car_travels_down_to_a_stop_below() {
        let mut car = car_at(5, 4);
        car.enqueue_stop(2, Direction::Up); // passenger wants up, car must come down
        assert_eq!(car.heading(), Heading::Down);
        for _ in 0..3 {
            car.step();
        }
        assert_eq!(car.floor(), 2);
        assert!(car.at_stop());
    }
}

#[cfg(test)]
mod stop_queue {
    use super::*;

    #[test]
    fn idle_enqueue_sets_heading() {
        let mut car = car_at(2, 4);
        assert!(car.enqueue_stop(6, Direction::Up));
        assert_eq!(car.heading(), Heading::Up);
        assert_eq!(car.stop_queue(), &[6]);
    }

    #[test]
    fn idle_enqueue_at_current_floor_adopts_request_direction() {
        let mut car = car_at(4, 4);
        assert!(car.enqueue_stop(4, Direction::Down));
        assert_eq!(car.heading(), Heading::Down);
        assert!(car.at_stop());
    }

    #[test]
    fn upward_sweep_kept_ascending() {
        let mut car = car_at(0, 4);
        car.enqueue_stop(5, Direction::Up);
        car.enqueue_stop(2, Direction::Up);
        car.enqueue_stop(7, Direction::Up);
        assert_eq!(car.stop_queue(), &[2, 5, 7]);
    }

    #[test]
    fn downward_sweep_kept_descending() {
        let mut car = car_at(9, 4);
        car.enqueue_stop(3, Direction::Down);
        car.enqueue_stop(6, Direction::Down);
        car.enqueue_stop(1, Direction::Down);
        assert_eq!(car.stop_queue(), &[6, 3, 1]);
    }

    #[test]
    fn duplicate_floor_is_accepted_once() {
        let mut car = car_at(0, 4);
        car.enqueue_stop(4, Direction::Up);
        assert!(car.enqueue_stop(4, Direction::Up));
        assert_eq!(car.stop_queue(), &[4]);
    }

    #[test]
    fn stop_behind_the_sweep_is_deferred() {
        let mut car = car_at(3, 4);
        car.enqueue_stop(6, Direction::Up);
        assert!(!car.enqueue_stop(1, Direction::Up)); // behind an up-sweep
        assert_eq!(car.stop_queue(), &[6]);
    }

    #[test]
    fn opposite_direction_stop_is_deferred() {
        let mut car = car_at(3, 4);
        car.enqueue_stop(6, Direction::Up);
        assert!(!car.enqueue_stop(5, Direction::Down)); // ahead, but wrong direction
        assert_eq!(car.stop_queue(), &[6]);
    }

    #[test]
    fn destination_opposing_an_idle_assignment_is_deferred() {
        // Idle car above the origin: it heads down for the pickup; the
        // passenger's up-destination must wait until boarding.
        let mut car = car_at(5, 4);
        assert!(car.enqueue_stop(2, Direction::Up));
        assert_eq!(car.heading(), Heading::Down);
        assert!(!car.enqueue_stop(4, Direction::Up));
        assert_eq!(car.stop_queue(), &[2]);
    }
}

#[cfg(test)]
mod load_unload {
    use super::*;

    #[test]
    fn boarding_appends_destination_and_retargets() {
        let (ledger, ids) = ledger_with(&[(2, 6)]);
        let mut car = car_at(2, 4);
        car.enqueue_stop(2, Direction::Up);

        let deferred = car.load_from(vec![ids[0]], &ledger).unwrap();
        assert!(deferred.is_empty());
        assert_eq!(car.onboard(), &[ids[0]]);
        assert!(car.stop_queue().contains(&6));
    }

    #[test]
    fn overflow_is_deferred_not_an_error() {
        let (ledger, ids) = ledger_with(&[(0, 3), (0, 4), (0, 5)]);
        let mut car = car_at(0, 2);
        car.enqueue_stop(0, Direction::Up);

        let deferred = car.load_from(ids.clone(), &ledger).unwrap();
        assert_eq!(car.onboard().len(), 2);
        assert_eq!(deferred, vec![ids[2]]);
    }

    #[test]
    fn boarding_order_is_fifo() {
        let (ledger, ids) = ledger_with(&[(0, 3), (0, 4), (0, 5)]);
        let mut car = car_at(0, 1);
        car.enqueue_stop(0, Direction::Up);

        let deferred = car.load_from(ids.clone(), &ledger).unwrap();
        assert_eq!(car.onboard(), &[ids[0]]);
        assert_eq!(deferred, vec![ids[1], ids[2]]);
    }

    #[test]
    fn unload_completes_arrivals_and_pops_stop() {
        let (mut ledger, ids) = ledger_with(&[(0, 2), (0, 4)]);
        let mut car = car_at(0, 4);
        car.enqueue_stop(0, Direction::Up);
        car.load_from(ids.clone(), &ledger).unwrap();
        car.unload_arrivals(&mut ledger, Tick(0)).unwrap(); // pops the pickup stop

        car.step();
        car.step();
        assert!(car.at_stop()); // at floor 2

        let completed = car.unload_arrivals(&mut ledger, Tick(2)).unwrap();
        assert_eq!(completed, vec![ids[0]]);
        assert_eq!(car.onboard(), &[ids[1]]);
        assert!(ledger.get(ids[0]).unwrap().has_completed());
        assert_eq!(ledger.get(ids[0]).unwrap().completed_tick(), Some(Tick(2)));
    }

    #[test]
    fn car_goes_idle_after_last_dropoff() {
        let (mut ledger, ids) = ledger_with(&[(0, 1)]);
        let mut car = car_at(0, 4);
        car.enqueue_stop(0, Direction::Up);
        car.load_from(ids, &ledger).unwrap();
        car.unload_arrivals(&mut ledger, Tick(0)).unwrap();

        car.step();
        car.unload_arrivals(&mut ledger, Tick(1)).unwrap();
        assert!(car.onboard().is_empty());
        assert!(car.stop_queue().is_empty());
        assert_eq!(car.heading(), Heading::Idle);
    }

    #[test]
    fn reverse_sweep_destination_served_after_pickup() {
        // Idle car at 5 serves (2 → 4, up): down to 2, board, then up to 4.
        let (mut ledger, ids) = ledger_with(&[(2, 4)]);
        let mut car = car_at(5, 4);
        car.enqueue_stop(2, Direction::Up);
        car.enqueue_stop(4, Direction::Up); // deferred

        for _ in 0..3 {
            car.step();
        }
        assert!(car.at_stop());
        car.unload_arrivals(&mut ledger, Tick(3)).unwrap();
        car.load_from(ids.clone(), &ledger).unwrap();
        assert_eq!(car.stop_queue(), &[4]);
        assert_eq!(car.heading(), Heading::Up);

        car.step();
        car.step();
        assert!(car.at_stop());
        let completed = car.unload_arrivals(&mut ledger, Tick(5)).unwrap();
        assert_eq!(completed, ids);
    }

    #[test]
    fn unknown_candidate_is_fatal() {
        let ledger = RequestLedger::new();
        let mut car = car_at(0, 4);
        car.enqueue_stop(0, Direction::Up);
        let err = car.load_from(vec![RequestId(9)], &ledger).unwrap_err();
        assert!(matches!(err, CarError::UnknownRequest { request: RequestId(9), .. }));
    }

    #[test]
    fn double_completion_surfaces_as_unload_error() {
        let (mut ledger, ids) = ledger_with(&[(0, 1)]);
        ledger.mark_completed(ids[0], Tick(0)).unwrap();

        let mut car = car_at(0, 4);
        car.enqueue_stop(0, Direction::Up);
        car.load_from(ids.clone(), &ledger).unwrap();
        car.unload_arrivals(&mut ledger, Tick(0)).unwrap();
        car.step();

        let err = car.unload_arrivals(&mut ledger, Tick(1)).unwrap_err();
        assert!(matches!(err, CarError::Unload { .. }));
    }
}
