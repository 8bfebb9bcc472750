#[cfg(test)]
mod tests {
    use chorelog::db::tasks::Tasks;
    use chorelog::db::TaskStore;
    use chorelog::libs::error::TaskError;
    use chorelog::libs::manager::TaskManager;
    use chorelog::libs::recurrence::Recurrence;
    use chorelog::libs::status::Status;
    use chorelog::libs::task::{NewTask, TaskEntry, UndoOutcome};
    use chrono::NaiveDate;
    use rusqlite::params;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ManagerTestContext {
        _temp_dir: TempDir,
        manager: TaskManager<Tasks>,
    }

    impl TestContext for ManagerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("chorelog.db")).unwrap();
            ManagerTestContext {
                _temp_dir: temp_dir,
                manager: TaskManager::new(tasks),
            }
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn valid(entry: &TaskEntry) -> (NaiveDate, Status) {
        let classified = entry.as_valid().expect("valid entry");
        (classified.task.due_date, classified.status)
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_monthly_rollover_one_step_per_query(ctx: &mut ManagerTestContext) {
        let start = date(2024, 1, 31);
        let today = date(2024, 3, 5);
        ctx.manager.add_on(NewTask::new("Pay rent", Recurrence::Monthly).starting(start), start).unwrap();

        let entries = ctx.manager.get_tasks_on(today).unwrap();
        assert_eq!(valid(&entries[0]), (date(2024, 2, 29), Status::Overdue { days: 5 }));
        // Rollover is persisted
        assert_eq!(ctx.manager.get_task(1).unwrap().due_date, date(2024, 2, 29));

        let entries = ctx.manager.get_tasks_on(today).unwrap();
        assert_eq!(valid(&entries[0]), (date(2024, 3, 31), Status::Pending));

        // Nothing left to roll
        let entries = ctx.manager.get_tasks_on(today).unwrap();
        assert_eq!(valid(&entries[0]).0, date(2024, 3, 31));
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_no_rollover_for_one_time_or_completed(ctx: &mut ManagerTestContext) {
        let start = date(2024, 1, 1);
        let today = date(2024, 1, 10);
        let once = ctx.manager.add_on(NewTask::new("Renew passport", Recurrence::OneTime).starting(start), start).unwrap();
        let daily = ctx.manager.add_on(NewTask::new("Stretch", Recurrence::Daily).starting(start), start).unwrap();
        ctx.manager.complete_on(daily.id, "", start).unwrap();

        let entries = ctx.manager.get_tasks_on(today).unwrap();
        assert_eq!(valid(&entries[0]), (start, Status::Overdue { days: 9 }));
        assert_eq!(valid(&entries[1]), (start, Status::Completed));
        assert_eq!(ctx.manager.get_task(once.id).unwrap().due_date, start);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_due_today_is_not_rolled(ctx: &mut ManagerTestContext) {
        let today = date(2024, 6, 3);
        ctx.manager.add_on(NewTask::new("Water plants", Recurrence::Weekly), today).unwrap();

        let entries = ctx.manager.get_tasks_on(today).unwrap();
        assert_eq!(valid(&entries[0]), (today, Status::DueToday));
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_add_defaults(ctx: &mut ManagerTestContext) {
        let today = date(2024, 4, 1);

        let task = ctx.manager.add_on(NewTask::new("  Call mom  ", Recurrence::OneTime), today).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.name, "Call mom");
        assert_eq!(task.start_date, today);
        assert_eq!(task.due_date, today);
        assert!(!task.completed);
        assert_eq!(task.notes, "");

        let task = ctx
            .manager
            .add_on(NewTask::new("File taxes", Recurrence::OneTime).due(date(2024, 4, 15)).with_notes("receipts in the drawer"), today)
            .unwrap();
        assert_eq!(task.id, 2);
        assert_eq!(task.due_date, date(2024, 4, 15));
        assert_eq!(task.notes, "receipts in the drawer");
        assert_eq!(ctx.manager.get_tasks_on(today).unwrap().len(), 2);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_add_rejects_due_before_start(ctx: &mut ManagerTestContext) {
        let today = date(2024, 4, 1);
        let err = ctx
            .manager
            .add_on(NewTask::new("Backwards", Recurrence::OneTime).starting(today).due(date(2024, 3, 1)), today)
            .unwrap_err();

        assert_eq!(
            err.downcast::<TaskError>().unwrap(),
            TaskError::DueBeforeStart {
                start: today,
                due: date(2024, 3, 1)
            }
        );
        assert!(ctx.manager.get_tasks_on(today).unwrap().is_empty());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_add_rejects_duplicate_id(ctx: &mut ManagerTestContext) {
        let today = date(2024, 4, 1);
        ctx.manager.add_on(NewTask::new("First", Recurrence::Daily).with_id(4), today).unwrap();

        let err = ctx.manager.add_on(NewTask::new("Second", Recurrence::Daily).with_id(4), today).unwrap_err();
        assert_eq!(err.downcast::<TaskError>().unwrap(), TaskError::DuplicateId(4));

        // Auto ids continue above explicit ones
        assert_eq!(ctx.manager.add_on(NewTask::new("Third", Recurrence::Daily), today).unwrap().id, 5);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_ids_not_reused_after_delete(ctx: &mut ManagerTestContext) {
        let today = date(2024, 4, 1);
        ctx.manager.add_on(NewTask::new("One", Recurrence::Daily), today).unwrap();
        let two = ctx.manager.add_on(NewTask::new("Two", Recurrence::Daily), today).unwrap();

        assert!(ctx.manager.delete(two.id).unwrap());
        let three = ctx.manager.add_on(NewTask::new("Three", Recurrence::Daily), today).unwrap();
        assert_eq!(three.id, 3);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_complete_and_undo_round_trip(ctx: &mut ManagerTestContext) {
        let today = date(2024, 5, 10);
        let task = ctx.manager.add_on(NewTask::new("Vacuum", Recurrence::Weekly), today).unwrap();

        ctx.manager.complete_on(task.id, "living room", today).unwrap();
        assert!(ctx.manager.get_task(task.id).unwrap().completed);
        assert_eq!(ctx.manager.last_completed_date(task.id).unwrap(), Some(today));
        assert_eq!(ctx.manager.completion_log().unwrap().len(), 1);

        assert_eq!(ctx.manager.undo().unwrap(), UndoOutcome::Reverted { task_id: task.id });
        assert!(!ctx.manager.get_task(task.id).unwrap().completed);
        assert_eq!(ctx.manager.last_completed_date(task.id).unwrap(), None);
        assert!(ctx.manager.completion_log().unwrap().is_empty());

        assert_eq!(ctx.manager.undo().unwrap(), UndoOutcome::NothingToUndo);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_listing_after_undo_reflects_reopened_task(ctx: &mut ManagerTestContext) {
        let today = date(2024, 6, 3);
        let task = ctx.manager.add_on(NewTask::new("Water plants", Recurrence::Weekly), today).unwrap();
        assert_eq!(valid(&ctx.manager.get_tasks_on(today).unwrap()[0]).1, Status::DueToday);

        ctx.manager.complete_on(task.id, "", today).unwrap();
        assert_eq!(valid(&ctx.manager.get_tasks_on(today).unwrap()[0]).1, Status::Completed);

        ctx.manager.undo().unwrap();
        let entries = ctx.manager.get_tasks_on(today).unwrap();
        let classified = entries[0].as_valid().unwrap();
        assert!(!classified.task.completed);
        assert_eq!(classified.status, Status::DueToday);
        assert_eq!(classified.last_completed, None);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_delete_cascades_to_completion_log(ctx: &mut ManagerTestContext) {
        let today = date(2024, 5, 10);
        let keep = ctx.manager.add_on(NewTask::new("Dishes", Recurrence::Daily), today).unwrap();
        let gone = ctx.manager.add_on(NewTask::new("Laundry", Recurrence::Weekly), today).unwrap();
        ctx.manager.complete_on(keep.id, "", today).unwrap();
        ctx.manager.complete_on(gone.id, "whites", today).unwrap();

        assert!(ctx.manager.delete(gone.id).unwrap());
        assert_eq!(ctx.manager.last_completed_date(gone.id).unwrap(), None);
        assert_eq!(ctx.manager.last_completed_date(keep.id).unwrap(), Some(today));

        let log = ctx.manager.completion_log().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].task_id, keep.id);

        // Undo only sees the surviving task's entry
        assert_eq!(ctx.manager.undo().unwrap(), UndoOutcome::Reverted { task_id: keep.id });
        assert_eq!(ctx.manager.undo().unwrap(), UndoOutcome::NothingToUndo);
        assert_eq!(ctx.manager.add_on(NewTask::new("Ironing", Recurrence::Daily), today).unwrap().id, 3);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_due_date_ignored_for_recurring_tasks(ctx: &mut ManagerTestContext) {
        let today = date(2024, 4, 1);
        let weekly = NewTask::new("Mow lawn", Recurrence::Weekly).due(date(2024, 4, 20));
        let once = NewTask::new("Dentist", Recurrence::OneTime).due(date(2024, 4, 20));
        assert!(weekly.ignores_due_date());
        assert!(!once.ignores_due_date());
        assert!(!NewTask::new("Stretch", Recurrence::Daily).ignores_due_date());

        assert_eq!(ctx.manager.add_on(weekly, today).unwrap().due_date, today);
        assert_eq!(ctx.manager.add_on(once, today).unwrap().due_date, date(2024, 4, 20));
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_complete_twice_logs_twice(ctx: &mut ManagerTestContext) {
        let today = date(2024, 5, 10);
        let task = ctx.manager.add_on(NewTask::new("Feed cat", Recurrence::Daily), today).unwrap();

        ctx.manager.complete_on(task.id, "morning", today).unwrap();
        ctx.manager.complete_on(task.id, "evening", today).unwrap();

        let log = ctx.manager.completion_log().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].comment, "evening");

        // One undo leaves the earlier completion in place
        ctx.manager.undo().unwrap();
        assert_eq!(ctx.manager.completion_log().unwrap().len(), 1);
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_complete_unknown_task(ctx: &mut ManagerTestContext) {
        let err = ctx.manager.complete_on(99, "", date(2024, 5, 10)).unwrap_err();
        assert_eq!(err.downcast::<TaskError>().unwrap(), TaskError::TaskNotFound(99));
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_delete_unknown_task_is_noop(ctx: &mut ManagerTestContext) {
        assert!(!ctx.manager.delete(12).unwrap());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_listing_reports_invalid_rows(ctx: &mut ManagerTestContext) {
        let today = date(2024, 5, 10);
        ctx.manager.add_on(NewTask::new("Fine", Recurrence::Daily), today).unwrap();
        ctx.manager
            .store()
            .conn
            .execute(
                "INSERT INTO tasks (id, name, recurrence, start_date, due_date, completed, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![2, "Broken", "daily", "2024-05-01", "not-a-date", false, ""],
            )
            .unwrap();
        ctx.manager
            .store()
            .conn
            .execute(
                "INSERT INTO tasks (id, name, recurrence, start_date, due_date, completed, notes) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![3, "Odd", "yearly", "2024-05-01", "2024-05-01", false, ""],
            )
            .unwrap();

        let entries = ctx.manager.get_tasks_on(today).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].as_valid().is_some());

        match &entries[1] {
            TaskEntry::Invalid(invalid) => {
                assert_eq!(invalid.name, "Broken");
                assert_eq!(
                    invalid.error,
                    TaskError::InvalidDate {
                        field: "due_date",
                        value: "not-a-date".to_string()
                    }
                );
            }
            other => panic!("expected an invalid entry, got {:?}", other),
        }
        match &entries[2] {
            TaskEntry::Invalid(invalid) => assert_eq!(invalid.error, TaskError::InvalidRecurrence("yearly".to_string())),
            other => panic!("expected an invalid entry, got {:?}", other),
        }
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_listing_serializes_to_json(ctx: &mut ManagerTestContext) {
        let today = date(2024, 5, 10);
        let task = ctx.manager.add_on(NewTask::new("Run", Recurrence::Daily).starting(date(2024, 5, 8)), today).unwrap();
        ctx.manager.complete_on(task.id, "", date(2024, 5, 9)).unwrap();

        let entries = ctx.manager.get_tasks_on(today).unwrap();
        let json = serde_json::to_value(entries[0].as_valid().unwrap()).unwrap();
        assert_eq!(json["task"]["start_date"], "2024-05-08");
        assert_eq!(json["task"]["recurrence"], "daily");
        assert_eq!(json["status"]["status"], "completed");
        assert_eq!(json["last_completed"], "2024-05-09");

        let round_trip: chorelog::libs::task::Task = serde_json::from_value(json["task"].clone()).unwrap();
        assert_eq!(round_trip, ctx.manager.get_task(task.id).unwrap());
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_listing_includes_last_completed(ctx: &mut ManagerTestContext) {
        let day = date(2024, 5, 10);
        let task = ctx.manager.add_on(NewTask::new("Run", Recurrence::Daily), day).unwrap();
        ctx.manager.complete_on(task.id, "5k", day).unwrap();

        let entries = ctx.manager.get_tasks_on(date(2024, 5, 12)).unwrap();
        assert_eq!(entries[0].as_valid().unwrap().last_completed, Some(day));
    }

    #[test]
    fn test_seed_fresh_store() {
        let today = date(2024, 1, 1);
        let seeds = vec![NewTask::new("Stretch", Recurrence::Daily)];

        let mut manager = TaskManager::new(Tasks::open_in_memory().unwrap());
        assert!(manager.is_empty().unwrap());
        assert_eq!(manager.seed(&seeds, today).unwrap().added, 1);
        assert!(!manager.is_empty().unwrap());
        assert_eq!(manager.get_task(1).unwrap().name, "Stretch");
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_seed_only_when_empty(ctx: &mut ManagerTestContext) {
        let today = date(2024, 1, 1);
        let seeds = vec![
            NewTask::new("Pay rent", Recurrence::Monthly).with_id(10),
            NewTask::new("Backwards", Recurrence::OneTime).starting(today).due(date(2023, 12, 1)),
            NewTask::new("Stretch", Recurrence::Daily),
        ];

        let report = ctx.manager.seed_if_empty(&seeds, today).unwrap().unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, "Backwards");

        let ids: Vec<i64> = ctx.manager.store().get_all_tasks().unwrap().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![10, 11]);

        assert!(ctx.manager.seed_if_empty(&seeds, today).unwrap().is_none());
    }
}
