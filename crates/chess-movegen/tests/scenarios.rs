//! End-to-end movement scenarios on small hand-built boards.

use chess_core::{Bounds, Color, Direction, Piece, PieceKind, Position};
use chess_movegen::{
    concretise, one_step_backward, slide_left, Board, BoardError, BoardView, Limit, MovePolicy,
    Origin, RuleSet, StandardChess,
};

fn at(file: u8, rank: u8) -> Position {
    Position::new(file, rank, Bounds::STANDARD).unwrap()
}

fn board_with(pieces: &[(Position, Piece)]) -> Board {
    let mut board = Board::empty(Bounds::STANDARD);
    for &(position, piece) in pieces {
        board.put(position, piece).unwrap();
    }
    board
}

fn white_rook() -> Piece {
    Piece::new(Color::White, PieceKind::Rook)
}

#[test]
fn test_slide_left_on_empty_rank() {
    let board = board_with(&[(at(4, 3), white_rook())]);
    let origin = board.origin(at(4, 3)).unwrap();

    let moves = slide_left(&origin, MovePolicy::SLIDE);

    let files: Vec<u8> = moves.destinations().iter().map(|p| p.file()).collect();
    assert_eq!(files, [0, 1, 2, 3]);
    assert!(moves.iter().all(|m| m.to.rank() == 3 && !m.is_capture()));
}

#[test]
fn test_slide_left_stops_at_capture() {
    let enemy = Piece::new(Color::Black, PieceKind::Knight);
    let board = board_with(&[(at(4, 3), white_rook()), (at(1, 3), enemy)]);
    let origin = board.origin(at(4, 3)).unwrap();

    let moves = slide_left(&origin, MovePolicy::SLIDE);

    assert_eq!(moves.len(), 3);
    let mut quiet: Vec<u8> = moves.quiet().map(|m| m.to.file()).collect();
    quiet.sort();
    assert_eq!(quiet, [2, 3]);
    let captures: Vec<_> = moves.captures().collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to, at(1, 3));
    assert_eq!(captures[0].captured, Some(enemy));
    assert!(!moves.destinations().contains(&at(0, 3)));
}

#[test]
fn test_slide_left_blocked_by_friend() {
    let board = board_with(&[
        (at(4, 3), white_rook()),
        (at(2, 3), Piece::new(Color::White, PieceKind::Pawn)),
    ]);
    let origin = board.origin(at(4, 3)).unwrap();

    let moves = slide_left(&origin, MovePolicy::SLIDE);

    assert_eq!(moves.destinations().into_iter().collect::<Vec<_>>(), [at(3, 3)]);
}

#[test]
fn test_one_step_backward_for_white() {
    let king = Piece::new(Color::White, PieceKind::King);
    let board = board_with(&[(at(4, 3), king)]);
    let origin = board.origin(at(4, 3)).unwrap();

    let moves = one_step_backward(&origin, MovePolicy::SLIDE);
    assert_eq!(moves.destinations().into_iter().collect::<Vec<_>>(), [at(4, 2)]);

    let blocked = board_with(&[(at(4, 3), king), (at(4, 2), white_rook())]);
    let origin = blocked.origin(at(4, 3)).unwrap();
    assert!(one_step_backward(&origin, MovePolicy::SLIDE).is_empty());
}

#[test]
fn test_one_step_backward_for_black_goes_up() {
    let board = board_with(&[(at(4, 3), Piece::new(Color::Black, PieceKind::King))]);
    let origin = board.origin(at(4, 3)).unwrap();
    let moves = one_step_backward(&origin, MovePolicy::SLIDE);
    assert_eq!(moves.destinations().into_iter().collect::<Vec<_>>(), [at(4, 4)]);
}

#[test]
fn test_slide_left_from_edge() {
    let board = board_with(&[(at(0, 3), white_rook())]);
    let origin = board.origin(at(0, 3)).unwrap();
    assert!(slide_left(&origin, MovePolicy::SLIDE).is_empty());
}

#[test]
fn test_zero_limit_is_empty() {
    let board = board_with(&[(at(4, 3), white_rook())]);
    let origin = board.origin(at(4, 3)).unwrap();
    assert!(concretise(&origin, Direction::Up, MovePolicy::SLIDE, Limit::Steps(0)).is_empty());
}

#[test]
fn test_empty_origin_fails_fast() {
    let board = Board::empty(Bounds::STANDARD);
    assert_eq!(
        Origin::new(&board, at(4, 3)).unwrap_err(),
        BoardError::EmptyOrigin(at(4, 3))
    );
    assert!(board.origin(at(4, 3)).is_none());
}

#[test]
fn test_generation_leaves_board_untouched() {
    let board = Board::startpos();
    let before = board.to_placement();
    for color in Color::ALL {
        StandardChess.color_moves(&board, color);
    }
    assert_eq!(board.to_placement(), before);
}

#[test]
fn test_wide_board() {
    // Ten files, six ranks.
    let board = Board::from_placement("10/10/10/4R5/10/10").unwrap();
    assert_eq!(board.bounds(), Bounds::new(10, 6).unwrap());
    let origin = board.origin(board.locate("e3").unwrap()).unwrap();
    assert_eq!(StandardChess.piece_moves(&origin).len(), 9 + 5);
}

#[test]
fn test_shared_snapshot_across_threads() {
    let board = Board::startpos();
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = Color::ALL
            .into_iter()
            .map(|color| {
                let board = &board;
                scope.spawn(move || StandardChess.color_moves(board, color).len())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(counts, [20, 20]);
}
