mod common;

use axum::http::Method;
use serde_json::json;

use common::{MockBackend, admin_session, client_for};
use samaysetu::modules::{
    AcademicYearService, CourseService, DepartmentService, DivisionService, RoomService,
    TeacherService, TimeSlotService,
};
use samaysetu::samaysetu_core::{ApiError, error_message};
use samaysetu::samaysetu_models::{
    AcademicYearId, CourseFilter, DEFAULT_REJECTION_REASON, DepartmentForm, DepartmentId,
    DivisionForm, RoomFilter, RoomForm, RoomType, Semester, TeacherId, TimeSlotForm,
};

fn courses_fixture() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Data Structures", "code": "CS201", "courseType": "THEORY",
         "credits": 4, "hoursPerWeek": 4, "semester": "SEM_3",
         "department": {"id": 1, "name": "Computer Engineering", "code": "CE"}},
        {"id": 2, "name": "Digital Electronics Lab", "code": "EC105", "courseType": "LAB",
         "credits": 1, "hoursPerWeek": 2, "semester": "SEM_1",
         "department": {"id": 2, "name": "Electronics", "code": "EC"}}
    ])
}

#[tokio::test]
async fn test_department_crud_round() {
    let backend = MockBackend::new();
    backend
        .json(
            Method::GET,
            "/admin/api/departments",
            200,
            json!([{"id": 1, "name": "Computer Engineering", "code": "CE",
                    "headOfDepartment": "", "createdAt": 1718000000000i64}]),
        )
        .json(Method::POST, "/admin/api/departments", 200, json!({"id": 2}))
        .text(Method::PUT, "/admin/api/departments/1", 200, "Department updated")
        .text(Method::DELETE, "/admin/api/departments/1", 200, "");
    let test = client_for(&backend, Some(admin_session())).await;
    let client = &test.client;

    let departments = DepartmentService::list(client).await.unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].head_of_department, None);
    assert!(departments[0].created_at.is_some());

    let form = DepartmentForm {
        name: "  Mechanical Engineering ".to_string(),
        code: "ME".to_string(),
        head_of_department: Some("   ".to_string()),
    };
    DepartmentService::create(client, form.clone()).await.unwrap();
    let sent = backend.requests_to(Method::POST, "/admin/api/departments")[0].json();
    assert_eq!(
        sent,
        json!({"name": "Mechanical Engineering", "code": "ME", "headOfDepartment": null})
    );

    DepartmentService::update(client, DepartmentId::new(1), form)
        .await
        .unwrap();
    DepartmentService::delete(client, DepartmentId::new(1))
        .await
        .unwrap();
    assert_eq!(
        backend
            .requests_to(Method::DELETE, "/admin/api/departments/1")
            .len(),
        1
    );
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let backend = MockBackend::new();
    let test = client_for(&backend, Some(admin_session())).await;

    let err = DepartmentService::create(&test.client, DepartmentForm::default())
        .await
        .unwrap_err();

    let ApiError::Validation(fields) = err else {
        panic!("expected validation error");
    };
    assert_eq!(fields.get("name"), Some("Name is required"));
    assert_eq!(fields.get("code"), Some("Code is required"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_course_search_filters_locally() {
    let backend = MockBackend::new();
    backend.json(Method::GET, "/admin/api/courses", 200, courses_fixture());
    let test = client_for(&backend, Some(admin_session())).await;

    let filter = CourseFilter {
        search: Some("lab".to_string()),
        department_id: None,
        semester: None,
    };
    let found = CourseService::search(&test.client, &filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "EC105");

    let filter = CourseFilter {
        search: None,
        department_id: Some(DepartmentId::new(1)),
        semester: Semester::new(3),
    };
    let found = CourseService::search(&test.client, &filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "CS201");
}

#[tokio::test]
async fn test_room_create_normalizes_number_and_wing() {
    let backend = MockBackend::new();
    backend.json(Method::POST, "/admin/api/rooms", 201, json!({"id": 9}));
    let test = client_for(&backend, Some(admin_session())).await;

    let form = RoomForm {
        name: "Main Lab".to_string(),
        room_number: "b204".to_string(),
        building_wing: String::new(),
        capacity: Some(60),
        room_type: RoomType::Lab,
        department_id: Some(DepartmentId::new(1)),
        has_projector: true,
        has_ac: false,
        equipment: None,
    };
    RoomService::create(&test.client, form).await.unwrap();

    let sent = backend.requests_to(Method::POST, "/admin/api/rooms")[0].json();
    assert_eq!(sent["roomNumber"], "B204");
    assert_eq!(sent["buildingWing"], "B");
    assert_eq!(sent["roomType"], "LAB");
    assert_eq!(sent["department"], json!({"id": 1}));
}

#[tokio::test]
async fn test_room_search_by_wing() {
    let backend = MockBackend::new();
    backend.json(
        Method::GET,
        "/admin/api/rooms",
        200,
        json!([
            {"id": 1, "name": "Lecture Hall", "roomNumber": "A101", "buildingWing": "A", "capacity": 80},
            {"id": 2, "name": "Seminar Room", "roomNumber": "B201", "buildingWing": "B", "capacity": 40}
        ]),
    );
    let test = client_for(&backend, Some(admin_session())).await;

    let filter = RoomFilter {
        search: None,
        department_id: None,
        wing: Some("B".to_string()),
    };
    let rooms = RoomService::search(&test.client, &filter).await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_number.as_str(), "B201");
}

#[tokio::test]
async fn test_divisions_by_academic_year_and_create() {
    let backend = MockBackend::new();
    backend
        .json(
            Method::GET,
            "/admin/api/divisions/academic-year/3",
            200,
            json!([{"id": 5, "name": "A", "year": 2, "branch": "Computer", "totalStudents": 60}]),
        )
        .text(Method::POST, "/admin/api/divisions", 200, "Division created");
    let test = client_for(&backend, Some(admin_session())).await;

    let divisions = DivisionService::list_by_academic_year(&test.client, AcademicYearId::new(3))
        .await
        .unwrap();
    assert_eq!(divisions[0].year, 2);

    let form = DivisionForm {
        name: "B".to_string(),
        year: 2,
        branch: "Computer".to_string(),
        total_students: Some(64),
        department_id: Some(DepartmentId::new(1)),
        academic_year_id: Some(AcademicYearId::new(3)),
    };
    DivisionService::create(&test.client, form).await.unwrap();
    let sent = backend.requests_to(Method::POST, "/admin/api/divisions")[0].json();
    assert_eq!(sent["academicYear"], json!({"id": 3}));
    assert_eq!(sent["totalStudents"], 64);
}

#[tokio::test]
async fn test_current_academic_year() {
    let backend = MockBackend::new();
    backend.json(
        Method::GET,
        "/admin/api/academic-years/current",
        200,
        json!({"id": 3, "yearName": "2024-25", "startDate": "2024-06-01",
               "endDate": "2025-05-31", "isCurrent": true}),
    );
    let test = client_for(&backend, Some(admin_session())).await;

    let year = AcademicYearService::current(&test.client).await.unwrap();
    assert_eq!(year.year_name, "2024-25");
    assert!(year.is_current);
    assert_eq!(year.start_date.unwrap().to_string(), "2024-06-01");
}

#[tokio::test]
async fn test_time_slot_create_sends_duration() {
    let backend = MockBackend::new();
    backend
        .json(Method::POST, "/admin/api/time-slots", 200, json!({"id": 1}))
        .json(
            Method::GET,
            "/api/time-slots",
            200,
            json!([{"id": 1, "slotName": "Lecture 1", "startTime": "09:00:00", "endTime": "10:00:00"}]),
        );
    let test = client_for(&backend, None).await;

    let form = TimeSlotForm {
        slot_name: "Lecture 1".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        is_break: false,
    };
    TimeSlotService::create(&test.client, form).await.unwrap();
    let sent = backend.requests_to(Method::POST, "/admin/api/time-slots")[0].json();
    assert_eq!(sent["durationMinutes"], 60);

    let slots = TimeSlotService::list_public(&test.client).await.unwrap();
    assert_eq!(slots[0].label(), "09:00 - 10:00");
}

#[tokio::test]
async fn test_teacher_approve_and_reject() {
    let backend = MockBackend::new();
    backend
        .text(Method::POST, "/api/teachers/7/approve", 200, "Teacher approved")
        .text(Method::POST, "/api/teachers/8/reject", 200, "Teacher rejected");
    let test = client_for(&backend, Some(admin_session())).await;

    TeacherService::approve(&test.client, TeacherId::new(7))
        .await
        .unwrap();
    assert_eq!(
        backend.requests_to(Method::POST, "/api/teachers/7/approve")[0].body,
        ""
    );

    TeacherService::reject(&test.client, TeacherId::new(8), None)
        .await
        .unwrap();
    let sent = &backend.requests_to(Method::POST, "/api/teachers/8/reject")[0];
    assert_eq!(sent.body, DEFAULT_REJECTION_REASON);
    assert_eq!(sent.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn test_pending_approvals_and_approved_list() {
    let backend = MockBackend::new();
    backend
        .json(
            Method::GET,
            "/api/teachers/pending-approvals",
            200,
            json!([{"id": 3, "name": "New Hire", "email": "new.hire@mitaoe.ac.in", "isApproved": false}]),
        )
        .json(
            Method::GET,
            "/api/teachers",
            200,
            json!([
                {"id": 1, "name": "Admin", "email": "admin@mitaoe.ac.in", "role": "ADMIN", "isApproved": true},
                {"id": 2, "name": "Asha Patil", "email": "asha@mitaoe.ac.in", "role": "TEACHER", "isApproved": true},
                {"id": 3, "name": "New Hire", "email": "new.hire@mitaoe.ac.in", "role": "TEACHER", "isApproved": false}
            ]),
        );
    let test = client_for(&backend, Some(admin_session())).await;

    let pending = TeacherService::pending_approvals(&test.client).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].weekly_hours_limit, 25);

    let approved = TeacherService::list_approved(&test.client).await.unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].name, "Asha Patil");
}

#[tokio::test]
async fn test_not_found_message() {
    let backend = MockBackend::new();
    let test = client_for(&backend, Some(admin_session())).await;

    let err = RoomService::get(&test.client, samaysetu::samaysetu_models::RoomId::new(404))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(error_message(&err), "Resource not found.");
}
